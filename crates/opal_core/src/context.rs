//! UI thread ownership

use std::thread::{self, ThreadId};

/// Ownership token for the thread that drives the UI.
///
/// Captured once on the UI thread at startup and handed to services whose
/// state may only be mutated from that thread. Services call [`is_owner`] at
/// the top of every mutating operation and reject callers on other threads
/// instead of marshaling for them.
///
/// [`is_owner`]: UiContext::is_owner
#[derive(Clone, Copy, Debug)]
pub struct UiContext {
    owner: ThreadId,
}

impl UiContext {
    /// Captures the calling thread as the UI owner.
    pub fn capture() -> Self {
        Self {
            owner: thread::current().id(),
        }
    }

    /// True when called from the owning thread.
    pub fn is_owner(&self) -> bool {
        thread::current().id() == self.owner
    }

    pub fn owner(&self) -> ThreadId {
        self.owner
    }
}
