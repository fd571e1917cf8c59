//! Collision handling: what to do when the output file already exists.
//!
//! The original tool kept two process-wide booleans for this. Here they
//! live on an explicit [`ModeFlags`] value owned by the session, and the
//! interactive prompt is a capability ([`CollisionPrompt`]) the caller
//! hands in, so the decision logic never touches a terminal directly.

use crate::error::Result;

/// Session-wide collision flags.
///
/// Both can be set at the same time; override-all wins by check order.
/// There is no way to unset a flag for the remainder of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    /// Skip every file that already exists without asking.
    pub skip_all: bool,
    /// Overwrite every existing file without asking.
    pub override_all: bool,
}

/// Outcome of a collision check for one candidate output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionChoice {
    /// Go ahead and (over)write the file.
    Proceed,
    /// Leave the existing file alone and move on.
    Skip,
    /// The user gave an answer other than `o` or `s`; leave the existing
    /// file untouched and move on.
    AbortInvalidChoice,
}

/// Blocking prompt asked when a collision needs a per-file answer.
///
/// Implementations return the raw answer string; [`decide`] interprets it.
/// The production implementation reads one line from the terminal; tests
/// script their answers.
pub trait CollisionPrompt {
    /// Ask what to do about `filename` already existing. Must block until
    /// an answer is available.
    fn ask(&mut self, filename: &str) -> Result<String>;
}

impl<F> CollisionPrompt for F
where
    F: FnMut(&str) -> Result<String>,
{
    fn ask(&mut self, filename: &str) -> Result<String> {
        self(filename)
    }
}

/// Decides whether a download may proceed over `filename`.
///
/// Precedence: override-all beats skip-all beats the existence check; the
/// prompt fires only when neither flag is set and the file exists. Answers
/// are case-insensitive single letters: `o` overwrites, `s` skips,
/// anything else aborts this file.
pub fn decide(
    flags: ModeFlags,
    path_exists: bool,
    filename: &str,
    prompt: &mut dyn CollisionPrompt,
) -> Result<CollisionChoice> {
    if flags.override_all {
        return Ok(CollisionChoice::Proceed);
    }
    if flags.skip_all {
        return Ok(CollisionChoice::Skip);
    }
    if !path_exists {
        return Ok(CollisionChoice::Proceed);
    }
    let answer = prompt.ask(filename)?;
    Ok(match answer.trim().to_lowercase().as_str() {
        "o" => CollisionChoice::Proceed,
        "s" => CollisionChoice::Skip,
        _ => CollisionChoice::AbortInvalidChoice,
    })
}
