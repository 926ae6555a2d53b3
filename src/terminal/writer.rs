//! Line-diffing frame writer.
//!
//! Only rows that changed since the last frame are rewritten, so the graphics
//! overlay survives redraws that do not touch the preview pane.

use crate::infrastructure::SharedOutput;
use crate::ui::Frame;
use std::io;

const CLEAR_SCREEN: &str = "\x1b[2J";
const CLEAR_TO_EOL: &str = "\x1b[K";

/// Remembers the last frame written and emits the difference to the next.
#[derive(Debug, Default)]
pub struct FrameWriter {
    previous: Option<Vec<String>>,
}

impl FrameWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the screen contents so the next frame is written in full.
    ///
    /// Used after something else drew on the terminal, such as an editor.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Writes `frame` to `output` as one atomic unit. Nothing is written when
    /// the frame is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal write fails.
    pub fn write(&mut self, frame: &Frame, output: &SharedOutput) -> io::Result<()> {
        let bytes = self.diff(frame);
        if bytes.is_empty() {
            return Ok(());
        }
        output.write_atomic(bytes.as_bytes())
    }

    /// Escape sequences turning the last frame into `frame`.
    fn diff(&mut self, frame: &Frame) -> String {
        let mut out = String::new();
        let previous = self.previous.take();

        if previous.is_none() {
            out.push_str(CLEAR_SCREEN);
        }
        let previous = previous.unwrap_or_default();

        for (i, line) in frame.lines.iter().enumerate() {
            if previous.get(i) != Some(line) {
                out.push_str(&format!("\x1b[{};1H{line}{CLEAR_TO_EOL}", i + 1));
            }
        }
        for i in frame.lines.len()..previous.len() {
            out.push_str(&format!("\x1b[{};1H{CLEAR_TO_EOL}", i + 1));
        }

        self.previous = Some(frame.lines.clone());
        out
    }
}
