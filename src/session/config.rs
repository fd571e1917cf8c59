//! Session configuration and the playlist range filter.

use std::path::PathBuf;
use std::sync::Arc;

use crate::mode::ModeFlags;
use crate::progress::ProgressBarOpts;
use crate::session::event::EventCallback;

/// Maximum playlist-resolution attempts before giving up.
pub const MAX_RESOLVE_ATTEMPTS: u32 = 30;

/// A contiguous, inclusive, 1-based interval of playlist indices to
/// exclude from downloading. Scoped to a single playlist invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    /// First excluded index.
    pub start: usize,
    /// Last excluded index.
    pub end: usize,
}

impl RangeFilter {
    /// Creates a filter excluding `[start, end]`, both 1-based inclusive.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether the 1-based `index` falls inside the excluded interval.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Configuration for a [`Session`](crate::session::Session).
#[derive(Clone)]
pub struct SessionConfig {
    /// Root directory for downloaded files. Playlist downloads nest under
    /// a sub-directory named after the sanitized playlist title.
    pub directory: PathBuf,
    /// Maximum playlist-resolution attempts.
    pub resolve_attempts: u32,
    /// Transport-level retries per HTTP request.
    pub transport_retries: u32,
    /// Collision-handling flags, mutable for the session lifetime.
    pub mode: ModeFlags,
    /// Progress bar styling for transfers.
    pub style: ProgressBarOpts,
    /// Callback for live reporting events.
    pub on_event: Option<Arc<EventCallback>>,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("directory", &self.directory)
            .field("resolve_attempts", &self.resolve_attempts)
            .field("transport_retries", &self.transport_retries)
            .field("mode", &self.mode)
            .field("style", &self.style)
            .field("on_event", &self.on_event.is_some())
            .finish()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("downloads"),
            resolve_attempts: MAX_RESOLVE_ATTEMPTS,
            transport_retries: 3,
            mode: ModeFlags::default(),
            style: ProgressBarOpts::default(),
            on_event: None,
        }
    }
}
