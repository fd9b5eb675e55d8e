//! Sink over any `Write` implementation

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Wraps a writer behind a mutex.
///
/// Useful for files and for capturing output in memory:
///
/// ```
/// use structured_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(WriterSink::new(Vec::new()));
/// let logger = Logger::builder().sink(Arc::clone(&sink)).build().unwrap();
/// logger.info("captured", None);
///
/// let output = sink.with_inner(|buf| String::from_utf8(buf.clone()).unwrap());
/// assert!(output.contains(r#""__message":"captured""#));
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_name(writer, "writer")
    }

    pub fn with_name(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            name: name.into(),
        }
    }

    /// Run `f` against the wrapped writer while holding the lock.
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<File> {
    /// Open `path` for appending, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_name(file, path.display().to_string()))
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line)?;
        writer.flush()
    }

    fn sync(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
