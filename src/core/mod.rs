//! Core logger types and traits

pub mod caller_id;
pub mod encoder;
pub mod error;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod terminator;
pub mod timestamp;

pub use encoder::{EncoderConfig, LevelEncoding};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use terminator::{ExitProcess, Terminator};
pub use timestamp::TimestampFormat;
