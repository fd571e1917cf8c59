//! Chunked streaming downloads.
//!
//! This module streams a resolved media URL to disk. Bytes land in a
//! `.part` sibling of the final path and are renamed into place only once
//! the stream ends cleanly, so a truncated transfer can never be mistaken
//! for a finished file. Cancellation is observed between chunks via
//! [`CancelFlag`] and always removes the `.part` artifact.

pub mod cancel;
pub mod fetcher;
pub mod summary;

pub use cancel::CancelFlag;
pub use fetcher::{fetch_to_file, part_path};
pub use summary::{Status, Summary};
