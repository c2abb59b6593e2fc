//! Upload validation and decoding
//!
//! Validates files before loading them into a session, checking for:
//! - File existence and permissions
//! - File size limits
//! - The `.txt` extension
//!
//! Decoding never fails: bytes that are not valid UTF-8 are read as Latin-1.

use std::fs;
use std::path::Path;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// The only extension accepted for uploads
pub const ACCEPTED_EXTENSION: &str = ".txt";

/// Errors that can occur when validating a file for loading
#[derive(Debug, Clone)]
pub enum FileOpenError {
    /// File does not exist
    NotFound,
    /// Permission denied to read file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// Extension other than `.txt`
    UnsupportedExtension { extension: String },
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Other I/O error
    IoError(String),
}

impl FileOpenError {
    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::UnsupportedExtension { .. } => "Only .txt files are supported.".to_string(),
            Self::TooLarge { size_mb } => {
                format!(
                    "{} is too large ({:.1} MB, max {} MB)",
                    filename,
                    size_mb,
                    MAX_FILE_SIZE / (1024 * 1024)
                )
            }
            Self::IoError(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::UnsupportedExtension { extension } if extension.is_empty() => {
                write!(f, "missing extension")
            }
            Self::UnsupportedExtension { extension } => {
                write!(f, "unsupported extension {}", extension)
            }
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileOpenError {}

/// True iff `ext` is `.txt`, compared case-insensitively.
///
/// `ext` includes the leading dot, as in `Path::extension` prefixed with `.`.
pub fn validate_extension(ext: &str) -> bool {
    ext.to_lowercase() == ACCEPTED_EXTENSION
}

/// Extension of a path with its leading dot (`""` when there is none)
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Validate a file before attempting to load it
///
/// Checks:
/// - File exists
/// - Is not a directory
/// - Has read permissions
/// - Does not exceed size limit
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileOpenError::NotFound,
        std::io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
        _ => FileOpenError::IoError(e.to_string()),
    })?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Validate an upload: the extension gate first, then the filesystem checks
pub fn validate_upload_path(path: &Path) -> Result<(), FileOpenError> {
    let extension = dotted_extension(path);
    if !validate_extension(&extension) {
        return Err(FileOpenError::UnsupportedExtension { extension });
    }
    validate_file_for_opening(path)
}

/// Which decoding produced a [`DecodedText`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

/// Upload bytes decoded into text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Decode uploaded bytes as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback can represent any byte sequence.
pub fn decode_upload(bytes: &[u8]) -> DecodedText {
    match std::str::from_utf8(bytes) {
        Ok(text) => DecodedText {
            text: text.to_string(),
            encoding: TextEncoding::Utf8,
        },
        Err(e) => {
            tracing::debug!(
                "Upload is not valid UTF-8 (valid up to byte {}), decoding as Latin-1",
                e.valid_up_to()
            );
            DecodedText {
                text: encoding_rs::mem::decode_latin1(bytes).into_owned(),
                encoding: TextEncoding::Latin1,
            }
        }
    }
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// File stem used as the base name of downloads (`notes.txt` -> `notes`)
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension(".txt"));
        assert!(validate_extension(".TXT"));
        assert!(validate_extension(".Txt"));
        assert!(!validate_extension("txt"));
        assert!(!validate_extension(".md"));
        assert!(!validate_extension(""));
    }

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension(Path::new("notes.txt")), ".txt");
        assert_eq!(dotted_extension(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(dotted_extension(Path::new("README")), "");
    }

    #[test]
    fn test_validate_nonexistent_file() {
        let result = validate_file_for_opening(Path::new("/nonexistent/path/file.txt"));
        assert!(matches!(result, Err(FileOpenError::NotFound)));
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_file_for_opening(dir.path());
        assert!(matches!(result, Err(FileOpenError::IsDirectory)));
    }

    #[test]
    fn test_validate_upload_rejects_extension_first() {
        let result = validate_upload_path(Path::new("/nonexistent/file.csv"));
        match result {
            Err(FileOpenError::UnsupportedExtension { extension }) => {
                assert_eq!(extension, ".csv")
            }
            other => panic!("Expected UnsupportedExtension, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_upload_accepts_txt() {
        let mut temp = Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(temp, "Hello, world!").unwrap();
        temp.flush().unwrap();

        assert!(validate_upload_path(temp.path()).is_ok());
    }

    #[test]
    fn test_validate_upload_rejects_untyped_tempfile() {
        let temp = NamedTempFile::new().unwrap();
        assert!(validate_file_for_opening(temp.path()).is_ok());
        assert!(matches!(
            validate_upload_path(temp.path()),
            Err(FileOpenError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_decode_utf8() {
        let decoded = decode_upload("héllo".as_bytes());
        assert_eq!(decoded.text, "héllo");
        assert_eq!(decoded.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_decode_latin1_fallback() {
        let decoded = decode_upload(&[b'c', b'a', b'f', 0xE9]);
        assert_eq!(decoded.text, "café");
        assert_eq!(decoded.encoding, TextEncoding::Latin1);
    }

    #[test]
    fn test_decode_latin1_maps_every_byte() {
        let bytes: Vec<u8> = (0..=255).collect();
        let decoded = decode_upload(&bytes);
        assert_eq!(decoded.encoding, TextEncoding::Latin1);
        assert_eq!(decoded.text.chars().count(), 256);
        assert!(decoded
            .text
            .chars()
            .zip(0u32..)
            .all(|(ch, code)| ch as u32 == code));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FileOpenError::NotFound.user_message("test.txt"),
            "File not found: test.txt"
        );
        assert_eq!(
            FileOpenError::IsDirectory.user_message("mydir"),
            "Cannot open directory: mydir"
        );
        assert_eq!(
            FileOpenError::UnsupportedExtension {
                extension: ".pdf".to_string()
            }
            .user_message("paper.pdf"),
            "Only .txt files are supported."
        );
    }

    #[test]
    fn test_file_stem_and_display_name() {
        let path = Path::new("/tmp/some/notes.txt");
        assert_eq!(file_stem(path), "notes");
        assert_eq!(filename_for_display(path), "notes.txt");
    }
}
