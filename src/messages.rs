//! Message types for the Elm-style architecture
//!
//! Every user action on a session is one of these messages.

use crate::format::OutputFormat;
use crate::model::OpenMode;

/// Actions that transform or inspect the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // === Transforms ===
    /// Uppercase the whole document
    ToUpper,
    /// Lowercase the whole document
    ToLower,
    /// Trim every line and the document as a whole
    Strip,
    /// Replace every occurrence of `old` (ignored when `old` is empty)
    Replace { old: String, new: String },
    /// Replace the document with edited text
    SetText(String),

    // === Queries ===
    /// Count occurrences of a substring (ignored when empty)
    Count(String),
    /// Show the first lines of the document
    Preview,
    /// Show line, word and character counts
    Stats,

    // === Settings ===
    SetMode(OpenMode),
    SetFormat(OutputFormat),
    /// Number of lines shown by `Preview`
    SetPreviewLines(usize),

    // === Output ===
    /// Build a download, appending `extra` when it is not blank
    Save { extra: String },
}
