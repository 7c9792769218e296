//! Pointer/input adapter
//!
//! Translates raw UI events into controller and driver calls. Pure
//! translation: one match, no state of its own. Left click labels the new
//! point 0, right click labels it 1.

use crate::core::{KernelKind, Label, Point};
use crate::session::{AnimationDriver, SessionController};
use serde::{Deserialize, Serialize};

/// Pointer buttons the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    /// The label a click with this button assigns
    pub fn label(&self) -> Label {
        match self {
            MouseButton::Left => Label::Zero,
            MouseButton::Right => Label::One,
        }
    }
}

/// One raw UI event, as delivered by the event loop or an event script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer motion; produces a live decision-value readout
    PointerMoved { x: f64, y: f64 },
    /// Click; appends a point labeled by the button
    Click { x: f64, y: f64, button: MouseButton },
    /// Play button
    Play,
    /// Pause button
    Pause,
    /// Reset button; restores the session and rewinds the animation
    Reset,
    /// Kernel radio button
    SelectKernel { kernel: KernelKind },
    /// Regularization slider
    SetC { value: f64 },
    /// Kernel width slider
    SetGamma { value: f64 },
}

/// Apply one event to the session and driver
///
/// Returns the decision readout for pointer motion (None blanks the readout
/// text); every other event returns None.
pub fn dispatch(
    session: &mut SessionController,
    driver: &mut AnimationDriver,
    event: &InputEvent,
) -> Option<f64> {
    match *event {
        InputEvent::PointerMoved { x, y } => session.decision_readout(Point::new(x, y)),
        InputEvent::Click { x, y, button } => {
            session.add_point(Point::new(x, y), button.label());
            None
        }
        InputEvent::Play => {
            driver.play();
            None
        }
        InputEvent::Pause => {
            driver.pause();
            None
        }
        InputEvent::Reset => {
            session.reset();
            driver.reset();
            None
        }
        InputEvent::SelectKernel { kernel } => {
            session.set_kernel(kernel);
            None
        }
        InputEvent::SetC { value } => {
            session.set_c(value);
            None
        }
        InputEvent::SetGamma { value } => {
            session.set_gamma(value);
            None
        }
    }
}
