//! Log record structure and its JSON line encoding

use super::caller_id;
use super::encoder::EncoderConfig;
use super::error::Result;
use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::backtrace::Backtrace;

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub caller_id: u64,
    pub context: Option<LogContext>,
    pub stacktrace: Option<String>,
}

impl LogRecord {
    /// Stamp a new record with the current time and calling thread.
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message,
            timestamp: Utc::now(),
            caller_id: caller_id::current(),
            context: None,
            stacktrace: None,
        }
    }

    /// Attach a context; empty contexts are not kept.
    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = (!context.is_empty()).then_some(context);
        self
    }

    pub fn with_stacktrace(mut self) -> Self {
        self.stacktrace = Some(Backtrace::force_capture().to_string());
        self
    }

    /// Encode as a single JSON line, trailing newline included.
    pub fn encode(&self, config: &EncoderConfig) -> Result<Vec<u8>> {
        let mut line = Vec::with_capacity(128 + self.message.len());
        serde_json::to_writer(&mut line, &Encoded { record: self, config })?;
        line.push(b'\n');
        Ok(line)
    }
}

struct Encoded<'a> {
    record: &'a LogRecord,
    config: &'a EncoderConfig,
}

impl Serialize for Encoded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let Encoded { record, config } = self;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(
            &config.timestamp_key,
            &config.timestamp_format.format(&record.timestamp),
        )?;
        map.serialize_entry(&config.level_key, config.level_encoding.encode(record.level))?;
        map.serialize_entry(&config.message_key, &record.message)?;
        map.serialize_entry(&config.caller_key, &record.caller_id)?;
        if let Some(context) = &record.context {
            map.serialize_entry(&config.context_key, context)?;
        }
        if let Some(stacktrace) = &record.stacktrace {
            map.serialize_entry(&config.stacktrace_key, stacktrace)?;
        }
        map.end()
    }
}
