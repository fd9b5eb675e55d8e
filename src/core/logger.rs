//! Main logger implementation

use super::{
    encoder::EncoderConfig,
    error::{is_ignorable_sync_error, Result},
    log_context::LogContext,
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    sink::Sink,
    terminator::{ExitProcess, Terminator},
    LoggerError,
};
use crate::sinks::StdoutSink;
use std::fmt;
use std::sync::Arc;

/// Handle to a configured JSON logger.
///
/// Construct once at startup and pass it (or clones of it) to whoever
/// needs to log. Clones share the sink, threshold and metrics.
#[derive(Clone)]
pub struct Logger {
    min_level: LogLevel,
    encoder: Arc<EncoderConfig>,
    sink: Arc<dyn Sink>,
    terminator: Arc<dyn Terminator>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a stdout logger with the threshold named by `level`.
    ///
    /// `level` is matched case-insensitively against `error`, `warn`,
    /// `info` and `debug`; anything else selects `info`.
    ///
    /// Fails only if stdout cannot be synced for a reason other than it
    /// being a console or pipe.
    pub fn new(level: &str) -> Result<Self> {
        Self::builder().level(level).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use structured_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .sink(StdoutSink::new())
    ///     .build()
    ///     .unwrap();
    /// assert!(logger.enabled(LogLevel::Debug));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The configured threshold
    pub fn level(&self) -> LogLevel {
        self.min_level
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush and sync the sink.
    ///
    /// Errors that only mean "this stream cannot be synced" are ignored.
    pub fn sync(&self) -> Result<()> {
        sync_sink(self.sink.as_ref())
    }

    /// Log with an optional structured context
    pub fn log(&self, level: LogLevel, message: impl Into<String>, context: Option<&LogContext>) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let mut record = LogRecord::new(level, message.into());
        if let Some(context) = context {
            record = record.with_context(context.clone());
        }
        self.dispatch(record);
    }

    /// Log a formatted message; never carries a context
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        self.dispatch(LogRecord::new(level, fmt::format(args)));
    }

    fn dispatch(&self, mut record: LogRecord) {
        if self.encoder.wants_stacktrace(record.level) {
            record = record.with_stacktrace();
        }

        let written = record
            .encode(&self.encoder)
            .and_then(|line| self.sink.write_line(&line).map_err(LoggerError::from));
        match written {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(_) => {
                self.metrics.record_write_error();
            }
        }

        if record.level == LogLevel::Fatal {
            let _ = self.sink.sync();
            self.terminator.terminate(&record);
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>, context: Option<&LogContext>) {
        self.log(LogLevel::Debug, message, context);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>, context: Option<&LogContext>) {
        self.log(LogLevel::Info, message, context);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>, context: Option<&LogContext>) {
        self.log(LogLevel::Warn, message, context);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>, context: Option<&LogContext>) {
        self.log(LogLevel::Error, message, context);
    }

    /// Log at fatal level, then hand the record to the terminator.
    ///
    /// With the default terminator this exits the process with status 1.
    #[inline]
    pub fn fatal(&self, message: impl Into<String>, context: Option<&LogContext>) {
        self.log(LogLevel::Fatal, message, context);
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Warn, args);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }

    #[inline]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Fatal, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("sink", &self.sink.name())
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}

fn sync_sink(sink: &dyn Sink) -> Result<()> {
    match sink.sync() {
        Err(err) if !is_ignorable_sync_error(&err) => Err(LoggerError::sync(sink.name(), err)),
        _ => Ok(()),
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use structured_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level("WARN")
///     .encoder(EncoderConfig::default().with_stacktrace_level(LogLevel::Error))
///     .terminator(ExitProcess::new(2))
///     .build()
///     .unwrap();
/// assert_eq!(logger.level(), LogLevel::Warn);
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    encoder: EncoderConfig,
    sink: Option<Arc<dyn Sink>>,
    terminator: Option<Arc<dyn Terminator>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            encoder: EncoderConfig::default(),
            sink: None,
            terminator: None,
        }
    }

    /// Set the threshold from a configured name (see [`Logger::new`])
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: &str) -> Self {
        self.min_level = LogLevel::threshold_from_str(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn encoder(mut self, encoder: EncoderConfig) -> Self {
        self.encoder = encoder;
        self
    }

    /// Replace the default stdout sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Replace the default process-exit behaviour of fatal records
    #[must_use = "builder methods return a new value"]
    pub fn terminator<T: Terminator + 'static>(mut self, terminator: T) -> Self {
        self.terminator = Some(Arc::new(terminator));
        self
    }

    /// Build the Logger, syncing the sink once.
    pub fn build(self) -> Result<Logger> {
        self.encoder.validate()?;

        let sink = self.sink.unwrap_or_else(|| Arc::new(StdoutSink::new()));
        sync_sink(sink.as_ref())?;

        Ok(Logger {
            min_level: self.min_level,
            encoder: Arc::new(self.encoder),
            sink,
            terminator: self
                .terminator
                .unwrap_or_else(|| Arc::new(ExitProcess::default())),
            metrics: Arc::new(LoggerMetrics::new()),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
