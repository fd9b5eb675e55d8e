//! What happens after a fatal record has been written

use super::log_record::LogRecord;

/// Termination hook invoked after every fatal record.
///
/// The default, [`ExitProcess`], never returns. Other implementations may
/// return to let the host shut down on its own terms.
pub trait Terminator: Send + Sync {
    fn terminate(&self, record: &LogRecord);
}

/// Exit the process with a fixed status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitProcess {
    pub code: i32,
}

impl ExitProcess {
    pub const fn new(code: i32) -> Self {
        Self { code }
    }
}

impl Default for ExitProcess {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Terminator for ExitProcess {
    fn terminate(&self, _record: &LogRecord) {
        std::process::exit(self.code);
    }
}

impl<F> Terminator for F
where
    F: Fn(&LogRecord) + Send + Sync,
{
    fn terminate(&self, record: &LogRecord) {
        self(record)
    }
}
