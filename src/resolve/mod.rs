//! Resolution of video and playlist URLs into downloadable targets.
//!
//! All YouTube-protocol knowledge lives behind the [`Resolve`] trait. The
//! production implementation ([`ytdlp::YtDlp`]) shells out to the external
//! `yt-dlp` extractor; tests substitute scripted stubs. Nothing else in
//! the crate knows how a watch URL becomes a direct media URL.

pub mod ytdlp;

pub use ytdlp::YtDlp;

use crate::error::Result;

/// A single video resolved down to a directly fetchable stream.
#[derive(Debug, Clone)]
pub struct DownloadTarget {
    /// Display title, unsanitized.
    pub title: String,
    /// Direct media URL ready for a streamed GET.
    pub media_url: String,
    /// Size in bytes if the extractor declared one.
    pub size_hint: Option<u64>,
}

/// One entry of a resolved playlist, not yet resolved to a stream.
#[derive(Debug, Clone)]
pub struct PlaylistEntry {
    /// Entry title if the playlist listing carried one.
    pub title: Option<String>,
    /// Watch URL to hand back to the resolver.
    pub url: String,
}

/// A playlist resolved to its title and ordered entries.
///
/// Entry order reflects playlist order and is stable for the lifetime of
/// this value; per-entry stream resolution happens lazily, one entry at a
/// time, as the walker reaches it.
#[derive(Debug, Clone)]
pub struct PlaylistHandle {
    /// Display title of the playlist, unsanitized.
    pub title: String,
    /// Entries in playlist order.
    pub entries: Vec<PlaylistEntry>,
}

/// The extraction collaborator.
pub trait Resolve {
    /// Resolves a single video URL into a [`DownloadTarget`].
    fn resolve_video(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<DownloadTarget>> + Send;

    /// Resolves a playlist URL into a [`PlaylistHandle`].
    fn resolve_playlist(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<PlaylistHandle>> + Send;
}
