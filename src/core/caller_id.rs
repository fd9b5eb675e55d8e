//! Numeric identifiers for the threads that emit log records
//!
//! Every thread receives a process-unique id the first time it asks for
//! one. The id is cached in a thread-local, so later lookups never touch
//! shared state. Ids start at 1 and are never reused.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static CURRENT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Id of the calling thread.
pub fn current() -> u64 {
    CURRENT_ID.with(|id| {
        if id.get() == 0 {
            id.set(NEXT_ID.fetch_add(1, Ordering::Relaxed));
        }
        id.get()
    })
}
