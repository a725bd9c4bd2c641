//! Immediate-start repeating interval
//!
//! The action runs once right away, then once per period until the
//! handle is stopped or dropped.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Repeating action runner backed by a worker thread
pub struct Repeater {
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Repeater {
    /// Spawn a repeater: `action` runs immediately, then every `every`
    /// until [`stop`](Self::stop) or drop.
    ///
    /// Stopping wakes a sleeping worker promptly rather than waiting out
    /// the current tick.
    pub fn spawn<F>(every: Duration, mut action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let worker = thread::spawn(move || loop {
            action();
            match stop_rx.recv_timeout(every) {
                Err(RecvTimeoutError::Timeout) => continue,
                _ => break,
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            worker: Some(worker),
        }
    }

    /// Stop ticking and join the worker
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop_tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for Repeater {
    fn drop(&mut self) {
        self.shutdown();
    }
}
