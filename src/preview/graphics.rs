//! Terminal graphics overlay sink.
//!
//! Images are painted with the Kitty graphics protocol, outside the frame
//! redraw cycle. Everything that touches the overlay goes through the
//! [`GraphicsSink`] trait so the preview protocol can be observed in tests
//! without a terminal.

use crate::infrastructure::SharedOutput;
use std::io;
use std::sync::{Arc, Mutex};

/// Kitty directive deleting every image on screen.
pub const CLEAR_ALL_IMAGES: &[u8] = b"\x1b_Ga=d,d=a\x1b\\";

/// 1-indexed terminal cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

/// Cell size and screen origin of an image placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageGeometry {
    pub cols: usize,
    pub rows: usize,
    pub origin: CellPos,
}

/// Destination for graphics overlay operations.
pub trait GraphicsSink: Send + Sync {
    /// Removes every image currently drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal write fails.
    fn clear(&self) -> io::Result<()>;

    /// Draws an already-encoded graphics `payload` at `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal write fails.
    fn draw(&self, origin: CellPos, payload: &[u8]) -> io::Result<()>;
}

/// Wraps `payload` so it lands at `origin` without moving the UI's cursor.
///
/// Layout: save cursor, move to `origin`, payload, restore cursor.
///
/// ```
/// use yappad::preview::graphics::{placement_bytes, CellPos};
///
/// let bytes = placement_bytes(CellPos { col: 30, row: 4 }, b"IMG");
/// assert_eq!(bytes, b"\x1b[s\x1b[4;30HIMG\x1b[u");
/// ```
#[must_use]
pub fn placement_bytes(origin: CellPos, payload: &[u8]) -> Vec<u8> {
    let goto = format!("\x1b[{};{}H", origin.row, origin.col);
    let mut buf = Vec::with_capacity(payload.len() + goto.len() + 6);
    buf.extend_from_slice(b"\x1b[s");
    buf.extend_from_slice(goto.as_bytes());
    buf.extend_from_slice(payload);
    buf.extend_from_slice(b"\x1b[u");
    buf
}

/// Sink writing to the real terminal through the shared output stream.
#[derive(Debug, Clone)]
pub struct TerminalSink {
    output: SharedOutput,
}

impl TerminalSink {
    #[must_use]
    pub const fn new(output: SharedOutput) -> Self {
        Self { output }
    }
}

impl GraphicsSink for TerminalSink {
    fn clear(&self) -> io::Result<()> {
        self.output.write_atomic(CLEAR_ALL_IMAGES)
    }

    fn draw(&self, origin: CellPos, payload: &[u8]) -> io::Result<()> {
        self.output.write_atomic(&placement_bytes(origin, payload))
    }
}

/// One operation observed by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsOp {
    Clear,
    Draw { origin: CellPos, len: usize },
}

/// In-memory sink that records operations in the order they happen.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    ops: Arc<Mutex<Vec<GraphicsOp>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the operations recorded so far.
    #[must_use]
    pub fn ops(&self) -> Vec<GraphicsOp> {
        self.ops.lock().map(|ops| ops.clone()).unwrap_or_default()
    }

    fn push(&self, op: GraphicsOp) -> io::Result<()> {
        self.ops
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?
            .push(op);
        Ok(())
    }
}

impl GraphicsSink for RecordingSink {
    fn clear(&self) -> io::Result<()> {
        self.push(GraphicsOp::Clear)
    }

    fn draw(&self, origin: CellPos, payload: &[u8]) -> io::Result<()> {
        self.push(GraphicsOp::Draw {
            origin,
            len: payload.len(),
        })
    }
}
