//! Output formats for downloads
//!
//! A document is re-encoded into one of four formats. Plain text and
//! Markdown pass the text through untouched, HTML wraps it in a `<pre>`
//! block, and CSV writes one single-field row per line.
//!
//! The HTML wrapper does not escape `<`, `>` or `&`. Text containing markup
//! ends up as live markup in the output, so HTML downloads must not be
//! rendered in a browser when the source text is untrusted.

use crate::util::text::split_lines;

/// Serialization selected for a download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Txt,
    Markdown,
    Html,
    Csv,
}

impl OutputFormat {
    /// All formats, in the order they are offered to the user
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Txt,
        OutputFormat::Markdown,
        OutputFormat::Html,
        OutputFormat::Csv,
    ];

    /// Parse a format tag such as `.html` (case-insensitive)
    ///
    /// Returns `None` for unknown tags; see [`OutputFormat::from_tag_or_txt`]
    /// for the permissive variant used by conversions.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            ".txt" => Some(Self::Txt),
            ".md" => Some(Self::Markdown),
            ".html" => Some(Self::Html),
            ".csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Parse a format tag, falling back to plain text for unknown tags
    pub fn from_tag_or_txt(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            tracing::debug!("Unknown output format {:?}, falling back to .txt", tag);
            Self::Txt
        })
    }

    /// File extension including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => ".txt",
            Self::Markdown => ".md",
            Self::Html => ".html",
            Self::Csv => ".csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// A converted download: encoded payload plus suggested filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl ConvertedFile {
    /// Payload as text (always valid UTF-8 for payloads produced here)
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Convert text for download using a raw format tag (e.g. `".CSV"`).
///
/// Unknown tags are treated as `.txt`. Never fails.
pub fn convert_text_for_format(text: &str, base_name: &str, format_tag: &str) -> ConvertedFile {
    convert_text(text, base_name, OutputFormat::from_tag_or_txt(format_tag))
}

/// Convert text for download into a known format
pub fn convert_text(text: &str, base_name: &str, format: OutputFormat) -> ConvertedFile {
    let bytes = match format {
        OutputFormat::Txt | OutputFormat::Markdown => text.as_bytes().to_vec(),
        OutputFormat::Html => wrap_html(text).into_bytes(),
        OutputFormat::Csv => lines_to_csv(text),
    };

    let filename = output_filename(base_name, format);
    tracing::debug!("Converted {} bytes into {}", bytes.len(), filename);

    ConvertedFile { bytes, filename }
}

/// `{base_name}_edited{ext}`
pub fn output_filename(base_name: &str, format: OutputFormat) -> String {
    format!("{}_edited{}", base_name, format.extension())
}

/// Embed text verbatim in a minimal HTML document (no escaping)
fn wrap_html(text: &str) -> String {
    format!("<html><body><pre>{}</pre></body></html>", text)
}

/// One single-field CSV row per line, CRLF terminated
fn lines_to_csv(text: &str) -> Vec<u8> {
    match write_csv_rows(text) {
        Ok(bytes) => bytes,
        Err(e) => {
            // Unreachable for an in-memory writer
            tracing::error!("CSV encoding failed, falling back to plain text: {}", e);
            text.as_bytes().to_vec()
        }
    }
}

fn write_csv_rows(text: &str) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::with_capacity(text.len() + 16));

    for line in split_lines(text) {
        writer.write_record([line])?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
