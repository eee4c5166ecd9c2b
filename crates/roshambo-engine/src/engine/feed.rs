use std::sync::{Arc, Mutex, PoisonError};

use crate::{Gesture, HandSnapshot, LowConfidenceError, classify};

/// The "latest classified gesture" slot shared between the asynchronous
/// pose path and the synchronous match state machine.
///
/// This is the only datum the two paths share. The pose pipeline overwrites
/// it (never appends) each time a frame classifies; the session reads it
/// exactly once per round, at the capture moment. Cloning the feed yields
/// another handle onto the same slot, so a camera worker thread can hold a
/// clone while the session keeps its own.
///
/// Classification itself is reentrant and side-effect-free; only the slot
/// write is serialized, through the mutex.
#[derive(Debug, Clone, Default)]
pub struct GestureFeed {
    latest: Arc<Mutex<Option<Gesture>>>,
}

impl GestureFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies a snapshot and stores the result as the latest gesture.
    ///
    /// Low-confidence snapshots are refused *without touching the slot*: a
    /// skipped frame never downgrades an earlier valid classification to
    /// `Unknown`. `Unknown` only ever enters the slot when a cleared
    /// snapshot matched no rule.
    pub fn observe(&self, snapshot: &HandSnapshot) -> Result<Gesture, LowConfidenceError> {
        if !snapshot.clears_confidence_floor() {
            return Err(LowConfidenceError);
        }
        let gesture = classify(snapshot);
        *self.lock() = Some(gesture);
        Ok(gesture)
    }

    /// Snapshot read of the latest classified gesture, if any frame has
    /// classified since the last clear.
    #[must_use]
    pub fn latest(&self) -> Option<Gesture> {
        *self.lock()
    }

    /// Reads and clears the slot in one step. Used once per round at the
    /// capture moment so no gesture leaks into the next round.
    #[must_use]
    pub fn take(&self) -> Option<Gesture> {
        self.lock().take()
    }

    /// Empties the slot. Called on round start and on match reset.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Gesture>> {
        // A poisoned lock only means a writer panicked mid-overwrite of a
        // Copy value; the slot contents are still coherent.
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
