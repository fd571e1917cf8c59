//! User-initiated cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag raised when the user interrupts an in-flight transfer.
///
/// The fetch loop polls it between chunks; the binary raises it from a
/// ctrl-c handler and re-arms it before the next menu action. Clones share
/// the same underlying flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a new, unraised flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether the flag has been raised.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Lowers the flag so the next operation starts fresh.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
