//! Standard output sink

use crate::core::Sink;
use std::io::{self, Write};

/// Writes records to the process's standard output.
///
/// Each record is written while holding the stdout lock, so lines from
/// different threads never interleave.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line)?;
        out.flush()
    }

    fn sync(&self) -> io::Result<()> {
        io::stdout().lock().flush()?;
        sync_stdout_fd()
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// `fsync` the stdout descriptor. Consoles and pipes report `EINVAL`
/// or `ENOTTY` here.
#[cfg(unix)]
fn sync_stdout_fd() -> io::Result<()> {
    use std::fs::File;
    use std::os::fd::AsFd;

    let fd = io::stdout().as_fd().try_clone_to_owned()?;
    File::from(fd).sync_all()
}

#[cfg(not(unix))]
fn sync_stdout_fd() -> io::Result<()> {
    Ok(())
}
