//! The session itself: single-video downloads and the playlist walker.

use std::path::Path;

use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, warn};

use super::config::{RangeFilter, SessionConfig};
use super::event::Event;
use crate::error::{Error, Result};
use crate::fetch::{fetch_to_file, CancelFlag, Status, Summary};
use crate::http::{create_http_client, HttpClientConfig};
use crate::mode::{self, CollisionChoice, CollisionPrompt, ModeFlags};
use crate::naming;
use crate::resolve::{DownloadTarget, PlaylistHandle, Resolve};

/// Outcome of one playlist-download invocation.
///
/// The invocation always returns a report rather than raising, except for
/// non-retryable resolution faults; exhausting the retry budget is
/// recorded here, not propagated.
#[derive(Debug, Default)]
pub struct PlaylistReport {
    /// Playlist title, when resolution succeeded.
    pub playlist_title: Option<String>,
    /// How many resolution attempts were made.
    pub resolve_attempts: u32,
    /// Whether resolution succeeded within the budget.
    pub resolved: bool,
    /// Whether the run stopped early because the user cancelled.
    pub cancelled: bool,
    /// Per-entry outcomes, in playlist order.
    pub files: Vec<Summary>,
}

impl PlaylistReport {
    /// Number of entries that downloaded successfully.
    pub fn downloaded(&self) -> usize {
        self.count(|s| matches!(s, Status::Success))
    }

    /// Number of entries skipped, for any reason.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, Status::Skipped(_)))
    }

    /// Number of entries that failed or were unavailable.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, Status::Fail(_) | Status::Unavailable(_)))
    }

    fn count(&self, pred: impl Fn(&Status) -> bool) -> usize {
        self.files.iter().filter(|f| pred(f.status())).count()
    }
}

/// A download session: output directory, collision flags, resolver, HTTP
/// client and cancel flag, all with a single owner.
pub struct Session<R> {
    config: SessionConfig,
    resolver: R,
    client: ClientWithMiddleware,
    cancel: CancelFlag,
}

impl<R: Resolve> Session<R> {
    /// Creates a session from its configuration and a resolver.
    pub(crate) fn new(config: SessionConfig, resolver: R) -> Result<Self> {
        let client = create_http_client(HttpClientConfig {
            retries: config.transport_retries,
        })?;
        Ok(Self {
            config,
            resolver,
            client,
            cancel: CancelFlag::new(),
        })
    }

    /// The downloads root directory.
    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    /// Current collision flags.
    pub fn mode(&self) -> ModeFlags {
        self.config.mode
    }

    /// Mutable access to the collision flags, for the menu toggles.
    pub fn mode_mut(&mut self) -> &mut ModeFlags {
        &mut self.config.mode
    }

    /// A handle to the cancel flag, to wire up an interrupt handler.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    fn emit(&self, event: Event<'_>) {
        if let Some(callback) = &self.config.on_event {
            callback(&event);
        }
    }

    /// Downloads a single video into the downloads root.
    ///
    /// Unavailable content is reported in the summary; resolution failures
    /// of any other kind propagate.
    pub async fn download_video(
        &self,
        url: &str,
        prompt: &mut dyn CollisionPrompt,
    ) -> Result<Summary> {
        let summary = match self.resolver.resolve_video(url).await {
            Ok(target) => {
                let filename = naming::video_filename(&target.title);
                let dir = self.config.directory.clone();
                self.download_target(&target, &dir, &filename, prompt).await
            }
            Err(Error::Unavailable(msg)) => Summary::new(url, self.config.directory.clone())
                .with_status(Status::Unavailable(msg)),
            Err(e) => return Err(e),
        };
        self.emit(Event::FileDone(&summary));
        Ok(summary)
    }

    /// Downloads a whole playlist, nesting files under a sub-directory
    /// named after the sanitized playlist title.
    ///
    /// Resolution is retried up to the configured bound on retryable
    /// errors; once it succeeds it is never retried again for this
    /// invocation, and per-entry failures never touch the retry budget.
    /// Entries whose 1-based index falls inside `range` are reported as
    /// skipped without invoking the downloader. A cancellation aborts the
    /// rest of the run.
    pub async fn download_playlist(
        &self,
        url: &str,
        range: Option<RangeFilter>,
        prompt: &mut dyn CollisionPrompt,
    ) -> Result<PlaylistReport> {
        let mut report = PlaylistReport::default();
        let playlist = match self.resolve_with_retry(url, &mut report.resolve_attempts).await? {
            Some(playlist) => playlist,
            None => return Ok(report),
        };
        report.resolved = true;
        self.emit(Event::PlaylistResolved {
            title: &playlist.title,
            videos: playlist.entries.len(),
        });

        let dir = self.config.directory.join(naming::sanitize(&playlist.title));
        for (i, entry) in playlist.entries.iter().enumerate() {
            let index = i + 1;
            if let Some(range) = range {
                if range.contains(index) {
                    self.emit(Event::SkippedByRange { index });
                    let name = entry.title.clone().unwrap_or_else(|| entry.url.clone());
                    report.files.push(
                        Summary::new(name, dir.clone())
                            .skip(format!("index {} in configured skip range", index)),
                    );
                    continue;
                }
            }
            if self.cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            let summary = match self.resolver.resolve_video(&entry.url).await {
                Ok(target) => {
                    let filename = naming::playlist_filename(&playlist.title, index, &target.title);
                    self.download_target(&target, &dir, &filename, prompt).await
                }
                Err(Error::Unavailable(msg)) => {
                    let name = entry.title.clone().unwrap_or_else(|| entry.url.clone());
                    Summary::new(name, dir.clone()).with_status(Status::Unavailable(msg))
                }
                Err(e) => {
                    let name = entry.title.clone().unwrap_or_else(|| entry.url.clone());
                    Summary::new(name, dir.clone()).fail(e)
                }
            };
            self.emit(Event::FileDone(&summary));
            let aborted = matches!(summary.status(), Status::Aborted);
            report.files.push(summary);
            if aborted {
                // Policy: cancelling one file cancels the whole run.
                report.cancelled = true;
                break;
            }
        }
        Ok(report)
    }

    /// Bounded retry wrapper around playlist resolution only.
    ///
    /// Returns `Ok(None)` when the budget is exhausted by retryable
    /// failures; non-retryable errors propagate immediately.
    async fn resolve_with_retry(
        &self,
        url: &str,
        attempts: &mut u32,
    ) -> Result<Option<PlaylistHandle>> {
        let max = self.config.resolve_attempts;
        loop {
            *attempts += 1;
            match self.resolver.resolve_playlist(url).await {
                Ok(playlist) => return Ok(Some(playlist)),
                Err(e) if e.is_retryable() && *attempts < max => {
                    warn!("playlist resolution attempt {}/{} failed: {}", attempts, max, e);
                    self.emit(Event::ResolveRetry {
                        attempt: *attempts,
                        max_attempts: max,
                        error: e.to_string(),
                    });
                }
                Err(e) if e.is_retryable() => {
                    warn!("playlist resolution gave up after {} attempts: {}", attempts, e);
                    self.emit(Event::ResolveExhausted);
                    return Ok(None);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Collision check followed by the actual transfer for one file.
    async fn download_target(
        &self,
        target: &DownloadTarget,
        dir: &Path,
        filename: &str,
        prompt: &mut dyn CollisionPrompt,
    ) -> Summary {
        let dest = dir.join(filename);
        let summary = Summary::new(filename, dest.clone());

        let choice = match mode::decide(self.config.mode, dest.exists(), filename, prompt) {
            Ok(choice) => choice,
            Err(e) => return summary.fail(e),
        };
        match choice {
            CollisionChoice::Proceed => {}
            CollisionChoice::Skip => return summary.skip("already downloaded"),
            CollisionChoice::AbortInvalidChoice => return summary.skip("invalid choice"),
        }

        debug!("downloading {:?} to {:?}", target.title, dest);
        match fetch_to_file(&self.client, target, &dest, &self.config.style, &self.cancel).await {
            Ok(bytes) => summary.succeed(bytes),
            Err(Error::Cancelled) => summary.with_status(Status::Aborted),
            Err(Error::Unavailable(msg)) => summary.with_status(Status::Unavailable(msg)),
            Err(e) => summary.fail(e),
        }
    }
}
