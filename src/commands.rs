//! Command types for the Elm-style architecture
//!
//! Commands describe outcomes the host must present or perform after an
//! update: printing results, or writing a download somewhere.

use crate::format::ConvertedFile;
use crate::util::TextStats;

/// Notice shown when saving is attempted in Read mode
pub const SAVE_DISABLED_NOTICE: &str = "Saving is disabled in Read mode.";

/// Side effects requested by `update()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Show the first lines of the document
    ShowPreview(Vec<String>),
    /// Show document statistics
    ShowStats(TextStats),
    /// Show the number of occurrences of a substring
    ShowCount { needle: String, count: usize },
    /// Show an informational message
    Notice(String),
    /// Offer a converted file for download
    Download(ConvertedFile),
}

impl Cmd {
    /// Text for hosts that print commands line by line
    pub fn describe(&self) -> String {
        match self {
            Cmd::ShowPreview(lines) => lines.join("\n"),
            Cmd::ShowStats(stats) => stats.to_string(),
            Cmd::ShowCount { count, .. } => format!("Occurrences: {}", count),
            Cmd::Notice(message) => message.clone(),
            Cmd::Download(file) => {
                format!("Download ready: {} ({} bytes)", file.filename, file.bytes.len())
            }
        }
    }
}
