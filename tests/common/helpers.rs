use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use ytfetch::resolve::{DownloadTarget, PlaylistEntry, PlaylistHandle, Resolve};
use ytfetch::{Error, Result};

/// Creates a temporary directory for testing purposes.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of the given size.
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file has the expected size.
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

/// A collision prompt that always answers the same thing.
pub fn auto_prompt(answer: &'static str) -> impl FnMut(&str) -> Result<String> {
    move |_: &str| -> Result<String> { Ok(answer.to_string()) }
}

/// A collision prompt that panics if it fires.
pub fn no_prompt() -> impl FnMut(&str) -> Result<String> {
    |filename: &str| -> Result<String> { panic!("unexpected prompt for {}", filename) }
}

/// Shared observation point for [`StubResolver`] calls.
#[derive(Default)]
pub struct StubState {
    /// Number of `resolve_playlist` calls so far.
    pub playlist_attempts: AtomicU32,
    /// URLs passed to `resolve_video`, in call order.
    pub resolved_videos: Mutex<Vec<String>>,
}

/// Scripted [`Resolve`] implementation.
///
/// Fails playlist resolution with a retryable error `fail_first` times
/// before succeeding, and serves video targets from a fixed map. URLs
/// without a registered target resolve as unavailable.
pub struct StubResolver {
    pub playlist: PlaylistHandle,
    pub fail_first: u32,
    pub targets: HashMap<String, DownloadTarget>,
    pub state: Arc<StubState>,
}

impl StubResolver {
    pub fn new(playlist_title: &str) -> Self {
        Self {
            playlist: PlaylistHandle {
                title: playlist_title.to_string(),
                entries: Vec::new(),
            },
            fail_first: 0,
            targets: HashMap::new(),
            state: Arc::new(StubState::default()),
        }
    }

    /// Make the first `n` playlist resolutions fail with a retryable error.
    pub fn fail_first(mut self, n: u32) -> Self {
        self.fail_first = n;
        self
    }

    /// Adds a playlist entry backed by a downloadable target.
    pub fn entry(mut self, title: &str, media_url: &str) -> Self {
        let url = format!("https://www.youtube.com/watch?v={}", title);
        self.playlist.entries.push(PlaylistEntry {
            title: Some(title.to_string()),
            url: url.clone(),
        });
        self.targets.insert(
            url,
            DownloadTarget {
                title: title.to_string(),
                media_url: media_url.to_string(),
                size_hint: None,
            },
        );
        self
    }

    /// Adds a playlist entry whose video resolution reports unavailable.
    pub fn unavailable_entry(mut self, title: &str) -> Self {
        self.playlist.entries.push(PlaylistEntry {
            title: Some(title.to_string()),
            url: format!("https://www.youtube.com/watch?v={}", title),
        });
        self
    }

    /// Registers a standalone video target, outside any playlist.
    pub fn video(mut self, url: &str, title: &str, media_url: &str) -> Self {
        self.targets.insert(
            url.to_string(),
            DownloadTarget {
                title: title.to_string(),
                media_url: media_url.to_string(),
                size_hint: None,
            },
        );
        self
    }
}

impl Resolve for StubResolver {
    async fn resolve_video(&self, url: &str) -> Result<DownloadTarget> {
        self.state
            .resolved_videos
            .lock()
            .unwrap()
            .push(url.to_string());
        self.targets
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Unavailable(format!("{} is gone", url)))
    }

    async fn resolve_playlist(&self, _url: &str) -> Result<PlaylistHandle> {
        let attempt = self.state.playlist_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt <= self.fail_first {
            return Err(Error::Extractor(format!(
                "flaky resolution, attempt {}",
                attempt
            )));
        }
        Ok(self.playlist.clone())
    }
}
