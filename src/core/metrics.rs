//! Logger metrics for observability
//!
//! Emission never reports failures to the caller, so these counters are the
//! only place where dropped records become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use structured_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_logged();
/// metrics.record_write_error();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.write_errors(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Records written to the sink
    total_logged: AtomicU64,

    /// Records discarded because they were below the threshold
    filtered_count: AtomicU64,

    /// Records lost to encoding or sink write failures
    write_errors: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.filtered_count(), 0);
        assert_eq!(metrics.write_errors(), 0);
    }

    #[test]
    fn test_counters_are_independent() {
        let metrics = LoggerMetrics::new();
        for _ in 0..90 {
            metrics.record_logged();
        }
        for _ in 0..10 {
            metrics.record_write_error();
        }
        metrics.record_filtered();

        assert_eq!(metrics.total_logged(), 90);
        assert_eq!(metrics.write_errors(), 10);
        assert_eq!(metrics.filtered_count(), 1);
    }
}
