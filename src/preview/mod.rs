//! Preview loading for the selected note.
//!
//! A file is either drawn as an image overlay or read into the viewport as
//! text. Failures never escape this module: unreadable files become a short
//! message, binaries become a `[Binary file: <mime>]` label, and text that
//! cannot be highlighted is shown raw.
//!
//! # Modules
//!
//! - [`classify`]: image/text decision and binary sniffing
//! - [`highlight`]: Markdown highlighting to ANSI
//! - [`image`]: external image-to-graphics conversion
//! - [`graphics`]: overlay sink (Kitty protocol on the real terminal)

pub mod classify;
pub mod graphics;
pub mod highlight;
pub mod image;

pub use classify::{classify, PreviewKind};
pub use graphics::{CellPos, GraphicsSink, ImageGeometry, RecordingSink, TerminalSink};
pub use image::{ChafaConverter, ImageConverter};

use classify::Sniffed;
use std::path::Path;

/// Text shown when a file cannot be read.
pub const READ_ERROR_TEXT: &str = "Error reading file";

/// Reads `path` and renders it for the viewport.
#[must_use]
pub fn load_text(path: &Path) -> String {
    let _span = tracing::debug_span!("load_text", path = %path.display()).entered();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "failed to read preview");
            return READ_ERROR_TEXT.to_string();
        }
    };

    if !classify::is_known_text(path) {
        if let Sniffed::Binary { mime } = classify::sniff(&bytes) {
            tracing::debug!(%mime, "binary preview");
            return format!("[Binary file: {mime}]");
        }
    }

    let text = String::from_utf8_lossy(&bytes);
    highlight::highlight_markdown(&text).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "highlighting failed, showing raw text");
        text.into_owned()
    })
}
