//! # Structured Logger
//!
//! A small structured logging facade that writes one JSON object per line.
//!
//! ## Features
//!
//! - **JSON Lines**: Every record is a single self-contained JSON object
//! - **Thread Tagged**: Each record carries the id of the emitting thread
//! - **Structured Context**: Typed key/value payloads per record
//! - **Thread Safe**: One write per record, no interleaving
//!
//! ```
//! use structured_logger::prelude::*;
//! use structured_logger::infof;
//!
//! let logger = Logger::new("debug").expect("stdout is usable");
//!
//! let context = LogContext::new()
//!     .with_field("user", "alice")
//!     .with_field("count", 3);
//! logger.info("user signed in", Some(&context));
//! infof!(logger, "{} users online", 42);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        caller_id, EncoderConfig, ExitProcess, FieldValue, LevelEncoding, LogContext, LogLevel,
        LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Sink, Terminator,
        TimestampFormat,
    };
    pub use crate::sinks::{StdoutSink, WriterSink};
}

pub use crate::core::{
    caller_id, EncoderConfig, ExitProcess, FieldValue, LevelEncoding, LogContext, LogLevel,
    LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Sink, Terminator,
    TimestampFormat,
};
pub use crate::sinks::{StdoutSink, WriterSink};
