//! Trailing-edge debounce as a cancellable scheduled task.
//!
//! Each call to [`Debouncer::schedule`] aborts the pending task and starts a
//! new one. Firings carry a generation number; [`Debouncer::accept`] only
//! lets through the firing of the most recent schedule, so a message that
//! was already queued when it got superseded is still discarded.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// A scheduled value whose quiet period elapsed.
#[derive(Debug)]
pub struct Fired<T> {
    generation: u64,
    value: T,
}

pub struct Debouncer<T, E> {
    delay: Duration,
    tx: UnboundedSender<E>,
    wrap: fn(Fired<T>) -> E,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl<T, E> Debouncer<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Firings are delivered on `tx` after `delay`, wrapped by `wrap`.
    pub fn new(delay: Duration, tx: UnboundedSender<E>, wrap: fn(Fired<T>) -> E) -> Self {
        Self {
            delay,
            tx,
            wrap,
            generation: 0,
            pending: None,
        }
    }

    /// Replace any pending firing with one for `value`.
    pub fn schedule(&mut self, value: T) {
        self.cancel();
        let fired = Fired {
            generation: self.generation,
            value,
        };
        let tx = self.tx.clone();
        let wrap = self.wrap;
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI is shutting down.
            let _ = tx.send(wrap(fired));
        }));
    }

    /// Drop the pending firing, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Unwrap a firing if it belongs to the latest schedule.
    pub fn accept(&mut self, fired: Fired<T>) -> Option<T> {
        if self.pending.is_none() || fired.generation != self.generation {
            return None;
        }
        self.pending = None;
        Some(fired.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T, E> Drop for Debouncer<T, E> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
