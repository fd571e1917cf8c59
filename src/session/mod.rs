//! Download session orchestration.
//!
//! A [`Session`] owns everything one run of the program needs: the output
//! directory, the collision [`ModeFlags`](crate::mode::ModeFlags), the
//! resolver, the HTTP client and the cancel flag. It exposes the two
//! operations the menu dispatches to, single-video download and playlist
//! download, the latter wrapping playlist resolution in a bounded retry
//! loop before iterating the resolved entries exactly once.
//!
//! The module is organized like the rest of the crate's component
//! modules:
//!
//! - `session` - the [`Session`] itself and the playlist walker
//! - `builder` - [`SessionBuilder`] for configuration
//! - `config` - [`SessionConfig`] and the [`RangeFilter`]
//! - `event` - live reporting callbacks

pub mod builder;
pub mod config;
pub mod event;
#[allow(clippy::module_inception)]
pub mod session;

pub use builder::SessionBuilder;
pub use config::{RangeFilter, SessionConfig};
pub use event::{Event, EventCallback};
pub use session::{PlaylistReport, Session};
