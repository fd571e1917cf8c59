//! Progress bar styling for transfers.
//!
//! Downloads run one at a time, so a single bar is enough. When the remote
//! declares a content length the bar shows bytes, percentage and ETA; when
//! it does not, reporting degrades to a spinner with a running byte
//! counter. Tests run with the hidden variant.

use indicatif::{ProgressBar, ProgressStyle};

/// Define the options for the transfer progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string for sized transfers.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_PIP.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
            enabled: true,
            clear: false,
        }
    }
}

impl ProgressBarOpts {
    /// Template which looks like the Python package installer pip.
    ///
    /// `━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 211.23 KiB/211.23 KiB 1008.31 KiB/s eta 0s`
    pub const TEMPLATE_PIP: &'static str =
        "{bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} eta {eta:.blue}";
    /// Template used when the total size is unknown: a plain byte counter.
    pub const TEMPLATE_BYTES_ONLY: &'static str =
        "{spinner:.green} {bytes:>11.green} {bytes_per_sec:>13.red}";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = &self.template {
            style = style.template(template).unwrap();
        }
        if let Some(progress_chars) = &self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] for a transfer of `len` bytes, or a byte
    /// counter when the length is unknown.
    pub fn to_progress_bar(&self, len: Option<u64>) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        match len {
            Some(len) => ProgressBar::new(len).with_style(self.to_progress_style()),
            None => {
                let style = ProgressStyle::default_spinner()
                    .template(Self::TEMPLATE_BYTES_ONLY)
                    .unwrap();
                ProgressBar::new_spinner().with_style(style)
            }
        }
    }

    /// Finish a bar according to the clear-on-completion setting.
    pub fn finish(&self, pb: &ProgressBar) {
        if self.clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_opts_produce_hidden_bar() {
        let pb = ProgressBarOpts::hidden().to_progress_bar(Some(100));
        assert!(pb.is_hidden());
    }

    #[test]
    fn sized_bar_has_length() {
        let pb = ProgressBarOpts::default().to_progress_bar(Some(2048));
        assert_eq!(pb.length(), Some(2048));
    }

    #[test]
    fn unknown_length_degrades_to_counter() {
        let pb = ProgressBarOpts::default().to_progress_bar(None);
        assert_eq!(pb.length(), None);
        pb.inc(512);
        assert_eq!(pb.position(), 512);
    }
}
