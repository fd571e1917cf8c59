//! Filesystem-safe naming for downloaded media.
//!
//! Titles coming back from the extractor may contain anything: path
//! separators, colons, emoji. [`sanitize`] keeps only characters that are
//! safe on every mainstream filesystem and drops the rest outright, so two
//! distinct titles may map to the same name. Callers tolerate the
//! resulting overwrite.

/// File extension used for every saved video.
pub const MEDIA_EXT: &str = "mp4";

/// Suffix appended to the output path while a transfer is in flight.
pub const PART_SUFFIX: &str = ".part";

/// Strips a title down to alphanumerics, spaces, underscores and hyphens.
///
/// Characters outside that set are dropped, not replaced, preserving the
/// relative order of the survivors. Sanitizing an already-clean string is
/// a no-op, and the result may be empty.
///
/// ```
/// use ytfetch::naming::sanitize;
///
/// assert_eq!(sanitize("Ep: 2!"), "Ep 2");
/// assert_eq!(sanitize("clean_name-1"), "clean_name-1");
/// ```
pub fn sanitize(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect()
}

/// Output filename for a standalone video: `<sanitizedTitle>.mp4`.
pub fn video_filename(title: &str) -> String {
    format!("{}.{}", sanitize(title), MEDIA_EXT)
}

/// Output filename for a playlist entry:
/// `<sanitizedPlaylistTitle>__<index>__<sanitizedTitle>.mp4`.
///
/// The index is 1-based and not zero-padded.
pub fn playlist_filename(playlist_title: &str, index: usize, title: &str) -> String {
    format!(
        "{}__{}__{}.{}",
        sanitize(playlist_title),
        index,
        sanitize(title),
        MEDIA_EXT
    )
}
