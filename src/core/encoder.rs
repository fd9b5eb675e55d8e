//! JSON encoder configuration
//!
//! Controls the key names and value renderings used when a [`LogRecord`]
//! is turned into a JSON line. The defaults produce:
//!
//! ```text
//! {"__timestamp":"2025-01-08T10:30:45.123Z","__level":"INFO","__message":"started","goid":1}
//! ```
//!
//! [`LogRecord`]: super::LogRecord

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// How the level is rendered in the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelEncoding {
    /// `INFO`, `WARN`, ...
    #[default]
    Capital,
    /// `info`, `warn`, ...
    Lowercase,
}

impl LevelEncoding {
    pub fn encode(&self, level: LogLevel) -> &'static str {
        match self {
            LevelEncoding::Capital => level.to_str(),
            LevelEncoding::Lowercase => level.to_lowercase_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub timestamp_key: String,
    pub level_key: String,
    pub message_key: String,
    pub caller_key: String,
    pub context_key: String,
    pub stacktrace_key: String,
    pub level_encoding: LevelEncoding,
    pub timestamp_format: TimestampFormat,
    /// Attach a captured backtrace to records at or above this level.
    pub stacktrace_level: Option<LogLevel>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            timestamp_key: "__timestamp".to_string(),
            level_key: "__level".to_string(),
            message_key: "__message".to_string(),
            caller_key: "goid".to_string(),
            context_key: "context".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            level_encoding: LevelEncoding::Capital,
            timestamp_format: TimestampFormat::Iso8601,
            stacktrace_level: None,
        }
    }
}

impl EncoderConfig {
    #[must_use]
    pub fn with_stacktrace_level(mut self, level: LogLevel) -> Self {
        self.stacktrace_level = Some(level);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_level_encoding(mut self, encoding: LevelEncoding) -> Self {
        self.level_encoding = encoding;
        self
    }

    /// Whether records at `level` carry a stack trace
    pub fn wants_stacktrace(&self, level: LogLevel) -> bool {
        self.stacktrace_level.is_some_and(|min| level >= min)
    }

    /// Reject empty or colliding key names and unrecognized timestamp formats.
    pub fn validate(&self) -> Result<()> {
        let keys = [
            ("timestamp_key", &self.timestamp_key),
            ("level_key", &self.level_key),
            ("message_key", &self.message_key),
            ("caller_key", &self.caller_key),
            ("context_key", &self.context_key),
            ("stacktrace_key", &self.stacktrace_key),
        ];

        for (i, (name, key)) in keys.iter().enumerate() {
            if key.is_empty() {
                return Err(LoggerError::config(
                    "EncoderConfig",
                    format!("{} must not be empty", name),
                ));
            }
            if let Some((other, _)) = keys[..i].iter().find(|(_, k)| k == key) {
                return Err(LoggerError::config(
                    "EncoderConfig",
                    format!("{} and {} both use '{}'", other, name, key),
                ));
            }
        }

        if let TimestampFormat::Custom(format_str) = &self.timestamp_format {
            if !self.timestamp_format.is_valid() {
                return Err(LoggerError::config(
                    "EncoderConfig",
                    format!("invalid timestamp format '{}'", format_str),
                ));
            }
        }

        Ok(())
    }
}
