//! Session model - the complete state of one editing session
//!
//! The document text is owned by [`Session`] and reassigned by `update()`
//! after every transform. Nothing else holds text between calls.

use std::path::Path;

use crate::config::HelperConfig;
use crate::format::OutputFormat;
use crate::util::{decode_upload, file_stem, TextEncoding};

/// Whether the session may produce downloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Preview and transform only
    #[default]
    Read,
    /// Saving (with optional appended text) is enabled
    Append,
}

impl OpenMode {
    pub fn can_save(&self) -> bool {
        matches!(self, Self::Append)
    }
}

/// The complete session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The current document
    pub text: String,
    /// Stem of the uploaded file, used to name downloads
    pub base_name: String,
    /// How the upload bytes were decoded
    pub encoding: TextEncoding,
    pub mode: OpenMode,
    /// Format used by the next save
    pub format: OutputFormat,
    /// Number of lines shown by the preview
    pub preview_lines: usize,
    /// strftime-style template for the "Processed on" footer
    pub timestamp_format: String,
}

impl Session {
    /// Create a session over already-decoded text
    pub fn new(text: impl Into<String>, base_name: impl Into<String>) -> Self {
        Self::with_config(text, base_name, &HelperConfig::default())
    }

    /// Create a session over decoded text, taking defaults from config
    pub fn with_config(
        text: impl Into<String>,
        base_name: impl Into<String>,
        config: &HelperConfig,
    ) -> Self {
        Self {
            text: text.into(),
            base_name: base_name.into(),
            encoding: TextEncoding::Utf8,
            mode: OpenMode::default(),
            format: config.output_format(),
            preview_lines: config.preview_lines,
            timestamp_format: config.timestamp_format.clone(),
        }
    }

    /// Create a session from raw upload bytes.
    ///
    /// The extension gate is the caller's job (see
    /// [`crate::util::validate_upload_path`]); this only decodes.
    pub fn from_upload(path: &Path, bytes: &[u8], config: &HelperConfig) -> Self {
        let decoded = decode_upload(bytes);
        tracing::info!(
            "Loaded {} ({} bytes, {:?})",
            path.display(),
            bytes.len(),
            decoded.encoding
        );

        let mut session = Self::with_config(decoded.text, file_stem(path), config);
        session.encoding = decoded.encoding;
        session
    }
}
