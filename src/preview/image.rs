//! External image-to-terminal-graphics conversion.

use std::path::Path;
use std::process::{Command, Stdio};

/// Converts an image file into graphics protocol bytes.
pub trait ImageConverter: Send + Sync {
    /// Renders `path` to fit `cols` x `rows` cells.
    ///
    /// Returns `None` when no image could be produced.
    fn convert(&self, path: &Path, cols: usize, rows: usize) -> Option<Vec<u8>>;
}

/// Converter backed by the `chafa` command line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChafaConverter {
    program: String,
}

impl ChafaConverter {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to the converter for one image.
    fn args(path: &Path, cols: usize, rows: usize) -> Vec<String> {
        vec![
            "-f".to_string(),
            "kitty".to_string(),
            "-s".to_string(),
            format!("{cols}x{rows}"),
            path.to_string_lossy().into_owned(),
        ]
    }
}

impl Default for ChafaConverter {
    fn default() -> Self {
        Self::new("chafa")
    }
}

impl ImageConverter for ChafaConverter {
    fn convert(&self, path: &Path, cols: usize, rows: usize) -> Option<Vec<u8>> {
        let _span = tracing::debug_span!("convert_image", program = %self.program, cols, rows).entered();

        let output = Command::new(&self.program)
            .args(Self::args(path, cols, rows))
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(out) if out.status.success() && !out.stdout.is_empty() => {
                tracing::debug!(bytes = out.stdout.len(), "image converted");
                Some(out.stdout)
            }
            Ok(out) => {
                tracing::debug!(status = %out.status, "converter produced no image");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to spawn image converter");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_request_kitty_output_at_pane_size() {
        let args = ChafaConverter::args(Path::new("/v/pic.png"), 52, 18);
        assert_eq!(args, vec!["-f", "kitty", "-s", "52x18", "/v/pic.png"]);
    }

    #[test]
    fn missing_program_yields_no_image() {
        let converter = ChafaConverter::new("yappad-no-such-converter");
        assert_eq!(converter.convert(Path::new("x.png"), 10, 10), None);
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_yields_no_image() {
        let converter = ChafaConverter::new("false");
        assert_eq!(converter.convert(Path::new("x.png"), 10, 10), None);
    }
}
