//! Event scripts
//!
//! The session has no window to click in, so interactive runs are driven by
//! JSON event scripts: an array of `InputEvent` values applied in order,
//! interleaved with animation ticks by the binary.

use crate::core::Result;
use crate::session::input::{InputEvent, MouseButton};
use std::fs;
use std::path::Path;

/// Load an event script from a JSON file
pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<InputEvent>> {
    let text = fs::read_to_string(path)?;
    let events = serde_json::from_str(&text)?;
    Ok(events)
}

/// The built-in script used when no file is given: a few clicks on both
/// sides of the boundary, a kernel switch, slider moves, and a pause/play
/// cycle
pub fn demo_script() -> Vec<InputEvent> {
    vec![
        InputEvent::PointerMoved { x: 0.0, y: 0.0 },
        InputEvent::Click {
            x: -0.5,
            y: 2.8,
            button: MouseButton::Right,
        },
        InputEvent::Click {
            x: 0.7,
            y: -3.1,
            button: MouseButton::Left,
        },
        InputEvent::SetGamma { value: 1.0 },
        InputEvent::Click {
            x: 2.4,
            y: -0.6,
            button: MouseButton::Right,
        },
        InputEvent::Pause,
        InputEvent::Play,
        InputEvent::SelectKernel {
            kernel: crate::core::KernelKind::Poly,
        },
        InputEvent::Click {
            x: -2.2,
            y: 0.4,
            button: MouseButton::Left,
        },
        InputEvent::PointerMoved { x: 1.0, y: 1.0 },
        InputEvent::Reset,
        InputEvent::Click {
            x: 0.0,
            y: 4.2,
            button: MouseButton::Right,
        },
    ]
}
