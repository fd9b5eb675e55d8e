//! Basic logger usage example
//!
//! Demonstrates levels, structured context and formatted calls.
//!
//! Run with: cargo run --example basic_usage -- [level]

use structured_logger::prelude::*;
use structured_logger::{debugf, warnf};

fn main() -> Result<()> {
    let level = std::env::args().nth(1).unwrap_or_else(|| "debug".to_string());

    // Records below this threshold are dropped
    let logger = Logger::new(&level)?;

    logger.debug("This is a debug message", None);
    logger.info("This is an info message", None);
    logger.warn("This is a warning message", None);
    logger.error("This is an error message", None);

    let context = LogContext::new()
        .with_field("user", "alice")
        .with_field("count", 3)
        .with_field("roles", vec!["admin", "ops"]);
    logger.info("User signed in", Some(&context));

    debugf!(logger, "Counter value: {}", 10);
    warnf!(logger, "Retry attempt {} of {}", 3, 5);

    // Clones share the same sink and threshold
    let worker = logger.clone();
    std::thread::spawn(move || worker.info("Hello from a worker thread", None))
        .join()
        .expect("worker thread panicked");

    logger.sync()
}
