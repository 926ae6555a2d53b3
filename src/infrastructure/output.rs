//! Single-writer access to the terminal output stream.
//!
//! Frame redraws happen on the event loop thread while image overlays are
//! written from worker threads. Both go through one [`SharedOutput`], and every
//! write is a single buffered `write_all` + `flush` under its lock, so an
//! overlay can never land in the middle of a frame and vice versa.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

type BoxedWriter = Box<dyn Write + Send>;

/// Cloneable handle to the process's terminal output.
#[derive(Clone)]
pub struct SharedOutput {
    inner: Arc<Mutex<BoxedWriter>>,
}

impl SharedOutput {
    /// Wraps the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(Box::new(io::stdout()))
    }

    #[must_use]
    pub fn from_writer(writer: BoxedWriter) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Creates an output backed by memory, returning the buffer it fills.
    #[must_use]
    pub fn in_memory() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let output = Self::from_writer(Box::new(MemoryWriter(Arc::clone(&buffer))));
        (output, buffer)
    }

    /// Writes `bytes` as one unit and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the underlying write fails.
    pub fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self.lock()?;
        writer.write_all(bytes)?;
        writer.flush()
    }

    /// Takes exclusive ownership of the stream until the guard is dropped.
    ///
    /// Held while an external program owns the terminal so late overlay
    /// writes wait for the UI to come back.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn lock(&self) -> io::Result<MutexGuard<'_, BoxedWriter>> {
        self.inner
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))
    }
}

impl std::fmt::Debug for SharedOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedOutput").finish_non_exhaustive()
    }
}

struct MemoryWriter(Arc<Mutex<Vec<u8>>>);

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .0
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_stream() {
        let (output, buffer) = SharedOutput::in_memory();
        let other = output.clone();

        output.write_atomic(b"frame").unwrap();
        other.write_atomic(b"+image").unwrap();

        assert_eq!(buffer.lock().unwrap().as_slice(), b"frame+image");
    }
}
