//! Concurrency against the real stdout sink
//!
//! The test binary re-runs itself with `STDOUT_CHILD` set. The child logs
//! from many threads through the default stdout sink, and the parent checks
//! that every record arrived on its own line.

use serde_json::Value;
use std::collections::HashSet;
use std::env;
use std::process::{Command, Output};
use std::sync::{Arc, Barrier};
use std::thread;
use structured_logger::prelude::*;

const CHILD_ENV: &str = "STDOUT_CHILD";

fn run_child(test_name: &str) -> Output {
    Command::new(env::current_exe().expect("test binary path"))
        .args([test_name, "--exact", "--nocapture", "--quiet"])
        .env(CHILD_ENV, test_name)
        .output()
        .expect("failed to run child process")
}

fn is_child(test_name: &str) -> bool {
    env::var(CHILD_ENV).as_deref() == Ok(test_name)
}

/// Every stdout line that carries a level key must be one whole record.
fn records(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| line.contains("\"__level\""))
        .map(|line| {
            let json = &line[line.find('{').unwrap_or(0)..];
            serde_json::from_str(json).unwrap_or_else(|e| panic!("bad line {:?}: {}", line, e))
        })
        .collect()
}

#[test]
fn test_concurrent_callers_on_stdout() {
    const NAME: &str = "test_concurrent_callers_on_stdout";
    const CALLERS: usize = 100;

    if is_child(NAME) {
        let logger = Logger::new("info").unwrap();
        let barrier = Arc::new(Barrier::new(CALLERS));

        let handles: Vec<_> = (0..CALLERS)
            .map(|i| {
                let logger = logger.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let context = LogContext::new()
                        .with_field("caller", i)
                        .with_field("padding", "x".repeat(4096));
                    barrier.wait();
                    logger.info(format!("caller {}", i), Some(&context));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        logger.sync().unwrap();
        return;
    }

    let output = run_child(NAME);
    assert!(
        output.status.success(),
        "child failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let records = records(&output);
    assert_eq!(records.len(), CALLERS);

    let callers: HashSet<u64> = records
        .iter()
        .map(|r| r["context"]["caller"].as_u64().unwrap())
        .collect();
    assert_eq!(callers.len(), CALLERS);

    for record in &records {
        let caller = record["context"]["caller"].as_u64().unwrap();
        assert_eq!(record["__level"], "INFO");
        assert_eq!(record["__message"], format!("caller {}", caller));
        assert_eq!(record["context"]["padding"].as_str().map(str::len), Some(4096));
    }

    let goids: HashSet<u64> = records.iter().map(|r| r["goid"].as_u64().unwrap()).collect();
    assert_eq!(goids.len(), CALLERS);
}
