//! Cancellable repeating timer.
//!
//! The simulator core is poll-driven; `Ticker` is the real-time driver that
//! calls the tick closure once per period on a dedicated thread. Stopping
//! signals the thread and joins it, so no pending tick survives a stop.

use std::ops::ControlFlow;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::Duration;

pub struct Ticker {
    shutdown: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a timer thread invoking `tick` once per `period`.
    ///
    /// The first invocation fires one full period after the spawn. The loop
    /// exits when `tick` returns `ControlFlow::Break` or the ticker is
    /// stopped.
    pub fn spawn<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let (shutdown, rx) = mpsc::channel::<()>();
        let handle = std::thread::Builder::new()
            .name("cb-sim-clock".to_string())
            .spawn(move || loop {
                match rx.recv_timeout(period) {
                    // Stop requested, or the owning Ticker was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        if tick().is_break() {
                            break;
                        }
                    }
                }
            })
            .expect("spawn cb-sim-clock thread");

        Self { shutdown, handle: Some(handle) }
    }

    /// Cancel the pending tick and wait for the thread to exit.
    pub fn stop(mut self) {
        self.stop_inner();
    }

    fn stop_inner(&mut self) {
        // Send fails if the thread already exited on its own; join anyway.
        let _ = self.shutdown.send(());
        if let Some(handle) = self.handle.take() {
            // A tick callback may stop the ticker from the timer thread
            // itself; the shutdown signal suffices there, and a self-join
            // would never return.
            if handle.thread().id() != std::thread::current().id() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop_inner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_ticker_fires_repeatedly_until_stopped() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);

        let ticker = Ticker::spawn(Duration::from_millis(2), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });

        std::thread::sleep(Duration::from_millis(50));
        ticker.stop();
        let after_stop = count.load(Ordering::SeqCst);
        assert!(after_stop >= 2, "expected multiple ticks, got {}", after_stop);

        // No tick may fire after stop() returns.
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_ticker_stops_when_closure_breaks() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);

        let ticker = Ticker::spawn(Duration::from_millis(1), move || {
            if counter.fetch_add(1, Ordering::SeqCst) + 1 >= 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), 3);
        ticker.stop();
    }

    #[test]
    fn test_drop_joins_the_thread() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);

        {
            let _ticker = Ticker::spawn(Duration::from_millis(2), move || {
                counter.fetch_add(1, Ordering::SeqCst);
                ControlFlow::Continue(())
            });
            std::thread::sleep(Duration::from_millis(10));
        }

        let after_drop = count.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }
}
