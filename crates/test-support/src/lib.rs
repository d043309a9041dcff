#![deny(unsafe_code)]

//! Shared helpers for tests across the ticklog workspace.
//!
//! [`CaptureBuffer`] is a cloneable in-memory writer: install one clone as a
//! logger target and read the collected bytes back through another.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use tempfile::TempDir;

/// Cloneable writer collecting everything written into a shared buffer.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured bytes.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Returns the captured output decoded as UTF-8 (lossy).
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Returns the captured output and clears the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Returns `true` when nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// Returns the captured output split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates a fresh temporary directory for log file tests.
pub fn log_dir() -> TempDir {
    tempfile::tempdir().expect("create temporary log directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_buffer() {
        let capture = CaptureBuffer::new();
        let mut writer = capture.clone();
        writer.write_all(b"one\ntwo\n").expect("write succeeds");

        assert_eq!(capture.contents(), "one\ntwo\n");
        assert_eq!(capture.lines(), vec!["one".to_owned(), "two".to_owned()]);
    }

    #[test]
    fn take_clears_buffer() {
        let capture = CaptureBuffer::new();
        let mut writer = capture.clone();
        writer.write_all(b"data").expect("write succeeds");

        assert_eq!(capture.take(), "data");
        assert!(capture.is_empty());
    }
}
