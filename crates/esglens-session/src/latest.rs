//! Stale-response guard for overlapping refreshes.
//!
//! The dashboard re-fetched on every filter change without cancelling
//! the previous request, so a slow stale response could overwrite a
//! newer one. Here every refresh starts with [`LatestValue::begin`],
//! which invalidates all in-flight predecessors; a response commits only
//! while its token is still the current generation.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Proof of which refresh a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// The newest committed value for one view, empty while the first load
/// is in flight.
#[derive(Debug, Default)]
pub struct LatestValue<T> {
    generation: AtomicU64,
    slot: Mutex<Option<T>>,
}

impl<T: Clone> LatestValue<T> {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            slot: Mutex::new(None),
        }
    }

    /// Start a refresh. Every token handed out before this one becomes
    /// stale immediately.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Store `value` if `token` is still the latest refresh. Returns
    /// whether the commit was accepted; stale responses are dropped.
    pub fn commit(&self, token: RequestToken, value: T) -> bool {
        let mut slot = match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Checked under the slot lock so a newer commit cannot lose to
        // an older one racing past the generation read.
        if self.generation.load(Ordering::SeqCst) != token.0 {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// The newest committed value, `None` while loading.
    pub fn current(&self) -> Option<T> {
        match self.slot.lock() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
