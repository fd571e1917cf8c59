//! ytfetch downloads single YouTube videos or whole playlists to disk
//! through an interactive menu.
//!
//! All YouTube-protocol work is delegated to the external `yt-dlp`
//! extractor behind the [`resolve::Resolve`] trait; this crate owns the
//! parts with actual design decisions: collision handling, the chunked
//! streaming download with temp-then-rename semantics, and the bounded
//! retry around playlist resolution.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use ytfetch::resolve::YtDlp;
//! use ytfetch::session::SessionBuilder;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ytfetch::Error> {
//! let session = SessionBuilder::new()
//!     .directory(PathBuf::from("downloads"))
//!     .build(YtDlp::default())?;
//! let mut prompt = |_: &str| -> ytfetch::Result<String> { Ok("s".to_string()) };
//! let summary = session
//!     .download_video("https://www.youtube.com/watch?v=dQw4w9WgXcQ", &mut prompt)
//!     .await?;
//! println!("{:?} -> {:?}", summary.status(), summary.path());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`error`] - centralized error handling with the `Error` enum
//! - [`naming`] - filename sanitizing and output naming conventions
//! - [`mode`] - collision flags, prompt seam and decision logic
//! - [`resolve`] - the extraction collaborator boundary and its yt-dlp
//!   implementation
//! - [`fetch`] - chunked streaming download, cancellation and summaries
//! - [`session`] - the session orchestrating downloads and the playlist
//!   walker
//! - [`http`] - HTTP client construction with retry middleware
//! - [`progress`] - progress bar styling
//! - [`shell`] - the interactive menu loop

pub mod error;
pub mod fetch;
pub mod http;
pub mod mode;
pub mod naming;
pub mod progress;
pub mod resolve;
pub mod session;
pub mod shell;

pub use error::{Error, Result};
pub use fetch::{CancelFlag, Status, Summary};
pub use http::{create_http_client, HttpClientConfig};
pub use mode::{CollisionChoice, CollisionPrompt, ModeFlags};
pub use progress::ProgressBarOpts;
pub use resolve::{DownloadTarget, PlaylistEntry, PlaylistHandle, Resolve};
pub use session::{Event, PlaylistReport, RangeFilter, Session, SessionBuilder};
