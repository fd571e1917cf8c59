//! `yt-dlp` backed resolver.
//!
//! Runs the external `yt-dlp` binary in JSON mode and parses its output.
//! The subprocess boundary is the opaque-collaborator boundary: this
//! module never second-guesses how the extractor talks to YouTube, it only
//! classifies its failures and deserializes its answers.

use std::process::Stdio;

use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use super::{DownloadTarget, PlaylistEntry, PlaylistHandle, Resolve};
use crate::error::{Error, Result};

/// Format selector handed to yt-dlp. Prefers a pre-merged mp4 stream so
/// the direct URL points at a single progressive download.
const FORMAT_SELECTOR: &str = "best[ext=mp4]/best";

/// Resolver that shells out to an installed `yt-dlp` binary.
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: String,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

impl YtDlp {
    /// Creates a resolver using the given executable name or path.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        debug!("running {} {:?}", self.program, args);
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| Error::Extractor(format!("failed to spawn {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(&stderr));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| Error::Malformed(format!("non-UTF-8 extractor output: {}", e)))
    }
}

impl Resolve for YtDlp {
    async fn resolve_video(&self, url: &str) -> Result<DownloadTarget> {
        let stdout = self
            .run(&["--no-warnings", "-f", FORMAT_SELECTOR, "-j", url])
            .await?;
        let raw: RawVideo = serde_json::from_str(&stdout)
            .map_err(|e| Error::Malformed(format!("video JSON: {}", e)))?;
        let size_hint = raw.size_hint();
        let media_url = raw
            .url
            .ok_or_else(|| Error::Malformed("no direct media URL in extractor output".into()))?;
        Ok(DownloadTarget {
            title: raw.title,
            media_url,
            size_hint,
        })
    }

    async fn resolve_playlist(&self, url: &str) -> Result<PlaylistHandle> {
        let stdout = self
            .run(&["--no-warnings", "--flat-playlist", "-J", url])
            .await?;
        let raw: RawPlaylist = serde_json::from_str(&stdout)
            .map_err(|e| Error::Malformed(format!("playlist JSON: {}", e)))?;
        let entries = raw
            .entries
            .into_iter()
            .map(PlaylistEntry::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(PlaylistHandle {
            title: raw.title.unwrap_or_else(|| "playlist".to_string()),
            entries,
        })
    }
}

/// Maps a failed yt-dlp run onto the crate error taxonomy by sniffing its
/// stderr. Unavailability phrasings come from yt-dlp itself.
fn classify_failure(stderr: &str) -> Error {
    let line = stderr
        .lines()
        .find(|l| l.contains("ERROR"))
        .unwrap_or(stderr)
        .trim()
        .to_string();
    let lowered = line.to_lowercase();
    if lowered.contains("unavailable")
        || lowered.contains("private video")
        || lowered.contains("has been removed")
    {
        Error::Unavailable(line)
    } else {
        Error::Extractor(line)
    }
}

#[derive(Debug, Deserialize)]
struct RawVideo {
    title: String,
    url: Option<String>,
    filesize: Option<u64>,
    filesize_approx: Option<f64>,
}

impl RawVideo {
    fn size_hint(&self) -> Option<u64> {
        self.filesize
            .or_else(|| self.filesize_approx.map(|s| s as u64))
    }
}

#[derive(Debug, Deserialize)]
struct RawPlaylist {
    title: Option<String>,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: Option<String>,
    url: Option<String>,
    title: Option<String>,
}

impl TryFrom<RawEntry> for PlaylistEntry {
    type Error = Error;

    fn try_from(raw: RawEntry) -> Result<Self> {
        let url = match (raw.url, raw.id) {
            (Some(url), _) => url,
            (None, Some(id)) => format!("https://www.youtube.com/watch?v={}", id),
            (None, None) => {
                return Err(Error::Malformed(
                    "playlist entry with neither url nor id".into(),
                ))
            }
        };
        Ok(PlaylistEntry {
            title: raw.title,
            url,
        })
    }
}
