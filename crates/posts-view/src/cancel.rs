//! Cancellation token shared between the mounted view and its in-flight load.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Flag flipped by the view's cleanup hook. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
