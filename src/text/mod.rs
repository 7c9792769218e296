//! Farsi text support
//!
//! Rendering backends draw glyphs left to right in logical order, which
//! mangles Farsi: letters lose their joined forms and come out mirrored.
//! [`fa`] fixes both by reshaping the letters into their contextual forms
//! and then reordering the line for display. [`set_farsi_font`] registers a
//! Farsi-capable font under the `sans-serif` family so labels drawn through
//! plotters can actually show the reshaped text.

use ar_reshaper::ArabicReshaper;
use log::{info, warn};
use plotters::style::register_font;
use plotters::style::FontStyle;
use std::fs;
use std::path::{Path, PathBuf};
use unicode_bidi::BidiInfo;

/// Farsi-capable fonts probed in order when no explicit path is given
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/vazirmatn/Vazirmatn-Regular.ttf",
    "/usr/share/fonts/truetype/vazir/Vazir.ttf",
    "/usr/share/fonts/truetype/farsiweb/nazli.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/Vazirmatn-Regular.ttf",
];

/// Prepare Farsi text for a left-to-right glyph renderer
///
/// Reshapes each letter into its contextual joined form, then reorders the
/// result into visual order. Text without right-to-left characters passes
/// through unchanged, so it is safe to route every label through this.
pub fn fa(text: &str) -> String {
    let reshaped = ArabicReshaper::default().reshape(text);
    let bidi = BidiInfo::new(&reshaped, None);
    bidi.paragraphs
        .iter()
        .map(|para| bidi.reorder_line(para, para.range.clone()))
        .collect()
}

/// Register a Farsi-capable font as the `sans-serif` family
///
/// Tries `path` first when given, then the known candidate locations.
/// Returns whether a font was registered; on false the caller should skip
/// text drawing rather than fail, matching the original helper's fallback
/// behavior. Never panics on missing or malformed font files.
pub fn set_farsi_font(path: Option<&Path>) -> bool {
    let candidates: Vec<PathBuf> = path
        .map(|p| vec![p.to_path_buf()])
        .unwrap_or_else(|| FONT_CANDIDATES.iter().map(PathBuf::from).collect());

    for candidate in &candidates {
        match fs::read(candidate) {
            Ok(bytes) => {
                // register_font wants 'static bytes; fonts are loaded once
                // per process so the leak is bounded.
                let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
                match register_font("sans-serif", FontStyle::Normal, bytes) {
                    Ok(()) => {
                        info!("registered font {}", candidate.display());
                        return true;
                    }
                    Err(_) => {
                        warn!("invalid font file {}", candidate.display());
                    }
                }
            }
            Err(e) => {
                warn!("cannot read font {}: {e}", candidate.display());
            }
        }
    }

    warn!("no usable font found; text labels will be skipped");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fa_is_deterministic() {
        let text = "\u{0633}\u{0644}\u{0627}\u{0645}"; // salām
        assert_eq!(fa(text), fa(text));
    }

    #[test]
    fn test_fa_reshapes_rtl_text() {
        let text = "\u{0633}\u{0644}\u{0627}\u{0645}";
        let shaped = fa(text);
        // Contextual forms come from the presentation-forms blocks
        assert_ne!(shaped, text);
        assert!(!shaped.is_empty());
    }

    #[test]
    fn test_fa_passes_ascii_through() {
        assert_eq!(fa("Running | Frame 7"), "Running | Frame 7");
        assert_eq!(fa(""), "");
    }

    #[test]
    fn test_set_farsi_font_missing_path_returns_false() {
        assert!(!set_farsi_font(Some(Path::new(
            "/nonexistent/fonts/vazir.ttf"
        ))));
    }

    #[test]
    fn test_set_farsi_font_invalid_bytes_returns_false() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"definitely not a font").expect("write");
        file.flush().expect("flush");
        assert!(!set_farsi_font(Some(file.path())));
    }
}
