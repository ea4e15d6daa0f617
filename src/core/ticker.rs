//! Repeating display tick.
//!
//! The ticker only asks the UI to re-render; it never mutates drafts. Its
//! worker thread stops when the guard is cancelled or dropped, and the guard
//! waits for the thread to exit, so no callback outlives the guard.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct DisplayTicker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl DisplayTicker {
    /// Call `on_tick(n)` every `interval`, `n` starting at 1.
    pub fn start<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(u64) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let mut ticks = 0u64;
            loop {
                match rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        ticks += 1;
                        on_tick(ticks);
                    }
                    // explicit stop, or guard dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            ticks
        });

        Self {
            stop: Some(tx),
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop ticking and return how many ticks fired.
    pub fn cancel(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        if let Some(tx) = self.stop.take() {
            let _ = tx.send(());
        }
        match self.handle.take() {
            Some(handle) => handle.join().unwrap_or(0),
            None => 0,
        }
    }
}

impl Drop for DisplayTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
