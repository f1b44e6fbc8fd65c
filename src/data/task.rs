//! Background CSV loading.
//!
//! The load runs on its own thread and reports through a channel the UI polls
//! once per frame. Each task carries a cancellation flag: once the task is
//! cancelled (explicitly, or by being dropped when the app replaces or tears
//! it down) the worker's result is discarded and never reaches the dashboard.

use crate::data::loader::{LoadError, LoadOutcome, ReelLoader};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

pub struct LoadTask {
    rx: Receiver<LoadOutcome>,
    cancelled: Arc<AtomicBool>,
}

impl LoadTask {
    /// Start loading `source` on a background thread.
    pub fn spawn(source: PathBuf) -> Self {
        let (tx, rx) = channel();
        let cancelled = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&cancelled);
        thread::spawn(move || {
            let outcome = ReelLoader::load_csv(&source);
            if flag.load(Ordering::Acquire) {
                debug!(path = %source.display(), "load cancelled, discarding result");
                return;
            }
            let _ = tx.send(outcome);
        });

        Self { rx, cancelled }
    }

    /// Non-blocking check for the load result.
    pub fn poll(&self) -> Option<LoadOutcome> {
        if self.is_cancelled() {
            return None;
        }
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::WorkerDisconnected)),
        }
    }

    /// Block up to `timeout` for the load result.
    pub fn wait(&self, timeout: Duration) -> Option<LoadOutcome> {
        if self.is_cancelled() {
            return None;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(LoadError::WorkerDisconnected)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for LoadTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
