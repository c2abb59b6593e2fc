//! Utility modules

pub mod file_validation;
pub mod text;

pub use text::{
    count_substring, get_preview_lines, get_stats, replace_text, split_lines, strip_text,
    to_lower, to_upper, TextStats, DEFAULT_PREVIEW_LINES,
};

pub use file_validation::{
    decode_upload, file_stem, filename_for_display, validate_extension,
    validate_file_for_opening, validate_upload_path, DecodedText, FileOpenError, TextEncoding,
    MAX_FILE_SIZE,
};
