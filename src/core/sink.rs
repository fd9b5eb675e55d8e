//! Sink trait for log output destinations

use std::io;

/// Destination for encoded log lines.
///
/// Implementations must write each line with a single write under their own
/// lock so that records from concurrent callers never interleave.
pub trait Sink: Send + Sync {
    /// Write one complete, newline-terminated record.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
    /// Flush buffered output and sync the underlying stream.
    fn sync(&self) -> io::Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn sync(&self) -> io::Result<()> {
        (**self).sync()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
