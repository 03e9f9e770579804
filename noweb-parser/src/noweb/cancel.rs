//! Cooperative cancellation for document scans.
//!
//! Scans are synchronous and single-threaded; the token is the only
//! suspension point. The tokenizer and folding computer check it once per
//! line and, when it fires, stop early and return what they have produced so
//! far. Cancellation is not an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable flag shared between a scan and the caller that may abort it.
///
/// The default token never fires.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Scans notice at their next per-line check.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
