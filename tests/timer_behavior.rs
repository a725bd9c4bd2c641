//! Integration tests: timer scheduling behavior
//!
//! Observable behavior of the debouncer and repeater through the public
//! API, using shared counters as the probe.

use app_support::{Debouncer, Repeater};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

// === Debouncer ===

#[test]
fn test_burst_of_calls_runs_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&count);
    let debouncer = Debouncer::new(Duration::from_millis(50), move || {
        probe.fetch_add(1, Ordering::SeqCst);
    });

    for _ in 0..10 {
        debouncer.call();
    }

    thread::sleep(Duration::from_millis(300));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_separate_bursts_run_separately() {
    let count = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&count);
    let debouncer = Debouncer::new(Duration::from_millis(40), move || {
        probe.fetch_add(1, Ordering::SeqCst);
    });

    debouncer.call();
    thread::sleep(Duration::from_millis(200));

    debouncer.call();
    thread::sleep(Duration::from_millis(200));

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_cancel_suppresses_the_pending_run() {
    let count = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&count);
    let debouncer = Debouncer::new(Duration::from_millis(60), move || {
        probe.fetch_add(1, Ordering::SeqCst);
    });

    debouncer.call();
    debouncer.cancel();

    thread::sleep(Duration::from_millis(250));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

// === Repeater ===

#[test]
fn test_repeater_first_run_is_immediate() {
    let count = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&count);
    let repeater = Repeater::spawn(Duration::from_secs(60), move || {
        probe.fetch_add(1, Ordering::SeqCst);
    });

    thread::sleep(Duration::from_millis(100));
    assert_eq!(count.load(Ordering::SeqCst), 1);

    drop(repeater);
}

#[test]
fn test_repeater_stop_is_final() {
    let count = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&count);
    let repeater = Repeater::spawn(Duration::from_millis(25), move || {
        probe.fetch_add(1, Ordering::SeqCst);
    });

    thread::sleep(Duration::from_millis(120));
    repeater.stop();
    let at_stop = count.load(Ordering::SeqCst);
    assert!(at_stop >= 2, "expected several runs, got {}", at_stop);

    thread::sleep(Duration::from_millis(120));
    assert_eq!(count.load(Ordering::SeqCst), at_stop);
}
