//! Per-file download result reporting.

use std::path::PathBuf;

/// Terminal state of one download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Attempt not yet made.
    NotStarted,
    /// The file was fully written and renamed into place.
    Success,
    /// The file was not touched, with the reason (collision skip, range
    /// skip, invalid prompt answer).
    Skipped(String),
    /// The user cancelled the transfer; no artifact remains.
    Aborted,
    /// The remote reported the content gone; any pre-existing completed
    /// file is untouched.
    Unavailable(String),
    /// The attempt failed with an error message.
    Fail(String),
}

/// Outcome of one download attempt, enough for the caller to print the
/// final absolute path and total bytes transferred.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Output filename (no directory).
    filename: String,
    /// Full output path the attempt targeted.
    path: PathBuf,
    /// Bytes written to disk by this attempt.
    bytes: u64,
    /// Terminal status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`] for an attempt that has not run yet.
    pub fn new(filename: impl Into<String>, path: PathBuf) -> Self {
        Self {
            filename: filename.into(),
            path,
            bytes: 0,
            status: Status::NotStarted,
        }
    }

    /// Attach a status.
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Mark the attempt successful with the number of bytes written.
    pub fn succeed(self, bytes: u64) -> Self {
        Self {
            bytes,
            status: Status::Success,
            ..self
        }
    }

    /// Mark the attempt failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the attempt skipped with a reason.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Skipped(format!("{}", msg)),
            ..self
        }
    }

    /// Get the output filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the targeted output path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get the number of bytes written.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Get the attempt's status.
    pub fn status(&self) -> &Status {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_starts_not_started() {
        let s = Summary::new("f.mp4", PathBuf::from("downloads/f.mp4"));
        assert_eq!(s.status(), &Status::NotStarted);
        assert_eq!(s.bytes(), 0);
        assert_eq!(s.filename(), "f.mp4");
    }

    #[test]
    fn succeed_records_bytes() {
        let s = Summary::new("f.mp4", PathBuf::from("f.mp4")).succeed(4096);
        assert_eq!(s.status(), &Status::Success);
        assert_eq!(s.bytes(), 4096);
    }

    #[test]
    fn skip_and_fail_carry_messages() {
        let s = Summary::new("f.mp4", PathBuf::from("f.mp4")).skip("already downloaded");
        assert_eq!(s.status(), &Status::Skipped("already downloaded".into()));
        let s = Summary::new("f.mp4", PathBuf::from("f.mp4")).fail("boom");
        assert_eq!(s.status(), &Status::Fail("boom".into()));
    }
}
