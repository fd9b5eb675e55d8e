//! Formatting macros for the `*f` logging calls.
//!
//! Each macro checks the threshold before the message is rendered and
//! never attaches a context.
//!
//! # Examples
//!
//! ```
//! use structured_logger::prelude::*;
//! use structured_logger::{errorf, infof};
//!
//! let logger = Logger::new("info").unwrap();
//!
//! let port = 8080;
//! infof!(logger, "Server listening on port {}", port);
//! errorf!(logger, "failed after {} tries: {}", 3, "timeout");
//! ```

/// Log a formatted message at an explicit level.
///
/// ```
/// # use structured_logger::prelude::*;
/// # let logger = Logger::new("debug").unwrap();
/// use structured_logger::logf;
/// logf!(logger, LogLevel::Warn, "queue depth {}", 512);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, format_args!($($arg)+))
    };
}

/// Log a formatted debug-level message.
///
/// ```
/// # use structured_logger::prelude::*;
/// # let logger = Logger::new("debug").unwrap();
/// use structured_logger::debugf;
/// debugf!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a formatted fatal-level message, then run the logger's terminator.
///
/// ```no_run
/// # use structured_logger::prelude::*;
/// # let logger = Logger::new("info").unwrap();
/// use structured_logger::fatalf;
/// fatalf!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
