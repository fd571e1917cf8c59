//! Live reporting events.
//!
//! Core logic never prints; it emits events through an optional callback
//! registered on the builder, and the binary turns them into colored
//! console output. Return values stay the source of truth for tests.

use crate::fetch::Summary;

/// Something worth telling the user about while a session operation runs.
#[derive(Debug)]
pub enum Event<'a> {
    /// A playlist resolved successfully.
    PlaylistResolved {
        /// Playlist display title.
        title: &'a str,
        /// Number of entries.
        videos: usize,
    },
    /// A resolution attempt failed with a retryable error; another attempt
    /// follows.
    ResolveRetry {
        /// The attempt that just failed, 1-based.
        attempt: u32,
        /// Total attempts allowed.
        max_attempts: u32,
        /// Human-readable failure description.
        error: String,
    },
    /// All resolution attempts were exhausted; the invocation gives up.
    ResolveExhausted,
    /// A playlist entry was excluded by the configured index range.
    SkippedByRange {
        /// 1-based playlist index of the excluded entry.
        index: usize,
    },
    /// A download attempt reached a terminal state.
    FileDone(&'a Summary),
}

/// Callback type for live reporting.
pub type EventCallback = Box<dyn Fn(&Event<'_>) + Send + Sync>;
