//! Trailing-edge debounce
//!
//! The action runs once the wait period has elapsed with no further
//! calls. [`Debouncer::cancel`] disarms a pending run; dropping the
//! handle disarms and joins the worker thread.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

enum Command {
    Arm,
    Disarm,
}

/// Debounced action runner backed by a worker thread
pub struct Debouncer {
    tx: Option<Sender<Command>>,
    worker: Option<JoinHandle<()>>,
    wait: Duration,
}

impl Debouncer {
    /// Create a debouncer that runs `action` once `wait` has elapsed
    /// since the most recent [`call`](Self::call).
    ///
    /// The action runs on the worker thread. A panic in the action kills
    /// the worker; it never unwinds into the caller.
    pub fn new<F>(wait: Duration, mut action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || {
            let mut deadline: Option<Instant> = None;
            loop {
                let command = match deadline {
                    Some(at) => {
                        let now = Instant::now();
                        if at <= now {
                            deadline = None;
                            action();
                            continue;
                        }
                        match rx.recv_timeout(at - now) {
                            Ok(command) => command,
                            Err(RecvTimeoutError::Timeout) => {
                                deadline = None;
                                action();
                                continue;
                            }
                            Err(RecvTimeoutError::Disconnected) => break,
                        }
                    }
                    None => match rx.recv() {
                        Ok(command) => command,
                        Err(_) => break,
                    },
                };

                match command {
                    Command::Arm => deadline = Some(Instant::now() + wait),
                    Command::Disarm => deadline = None,
                }
            }
        });

        Self {
            tx: Some(tx),
            worker: Some(worker),
            wait,
        }
    }

    /// Arm (or re-arm) the debounce deadline
    pub fn call(&self) {
        self.send(Command::Arm);
    }

    /// Disarm any pending run
    pub fn cancel(&self) {
        self.send(Command::Disarm);
    }

    /// The configured wait period
    pub fn wait(&self) -> Duration {
        self.wait
    }

    fn send(&self, command: Command) {
        if let Some(tx) = &self.tx {
            if tx.send(command).is_err() {
                debug!("debounce worker is gone, command dropped");
            }
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        // Closing the channel wakes the worker; a pending run is
        // discarded with it.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_debouncer(wait_ms: u64) -> (Debouncer, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let debouncer = Debouncer::new(Duration::from_millis(wait_ms), move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        (debouncer, count)
    }

    #[test]
    fn test_runs_once_after_quiet_period() {
        let (debouncer, count) = counting_debouncer(50);

        debouncer.call();
        debouncer.call();
        debouncer.call();

        thread::sleep(Duration::from_millis(300));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_run_without_call() {
        let (_debouncer, count) = counting_debouncer(20);

        thread::sleep(Duration::from_millis(150));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_rearm_extends_deadline() {
        let (debouncer, count) = counting_debouncer(200);

        debouncer.call();
        thread::sleep(Duration::from_millis(100));
        debouncer.call();
        thread::sleep(Duration::from_millis(100));

        // Still within the re-armed window
        assert_eq!(count.load(Ordering::SeqCst), 0);

        thread::sleep(Duration::from_millis(400));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_disarms_pending_run() {
        let (debouncer, count) = counting_debouncer(50);

        debouncer.call();
        debouncer.cancel();

        thread::sleep(Duration::from_millis(200));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_callable_again_after_cancel() {
        let (debouncer, count) = counting_debouncer(50);

        debouncer.call();
        debouncer.cancel();
        debouncer.call();

        thread::sleep(Duration::from_millis(300));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_discards_pending_run() {
        let (debouncer, count) = counting_debouncer(100);

        debouncer.call();
        drop(debouncer);

        thread::sleep(Duration::from_millis(250));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_wait_accessor() {
        let (debouncer, _count) = counting_debouncer(75);
        assert_eq!(debouncer.wait(), Duration::from_millis(75));
    }
}
