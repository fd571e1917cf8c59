//! Builder pattern for creating [`Session`] instances.
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use ytfetch::resolve::YtDlp;
//! use ytfetch::session::SessionBuilder;
//!
//! # fn main() -> Result<(), ytfetch::Error> {
//! let session = SessionBuilder::new()
//!     .directory(PathBuf::from("downloads"))
//!     .resolve_attempts(30)
//!     .build(YtDlp::default())?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use super::{config::SessionConfig, event::Event, session::Session};
use crate::error::Result;
use crate::progress::ProgressBarOpts;
use crate::resolve::Resolve;

/// A builder used to create a [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        SessionBuilder::default()
    }

    /// Convenience constructor hiding the progress bars, for tests and
    /// non-interactive use.
    pub fn hidden() -> Self {
        let mut builder = SessionBuilder::default();
        builder.config.style = ProgressBarOpts::hidden();
        builder
    }

    /// Sets the downloads root directory.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Sets the maximum number of playlist-resolution attempts.
    pub fn resolve_attempts(mut self, attempts: u32) -> Self {
        self.config.resolve_attempts = attempts;
        self
    }

    /// Sets the number of transport-level retries per HTTP request.
    pub fn transport_retries(mut self, retries: u32) -> Self {
        self.config.transport_retries = retries;
        self
    }

    /// Sets the progress bar styling.
    pub fn style(mut self, style: ProgressBarOpts) -> Self {
        self.config.style = style;
        self
    }

    /// Registers a callback for live reporting events.
    pub fn on_event<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Event<'_>) + Send + Sync + 'static,
    {
        self.config.on_event = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Creates the [`Session`] with the specified options and resolver.
    pub fn build<R: Resolve>(self, resolver: R) -> Result<Session<R>> {
        Session::new(self.config, resolver)
    }
}
