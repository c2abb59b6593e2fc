//! String transforms, line splitting and document statistics
//!
//! Every function here is pure: text in, new text (or a number) out.

/// Number of lines shown by the preview when nothing else is configured
pub const DEFAULT_PREVIEW_LINES: usize = 20;

/// Uppercase every character using the full Unicode mapping (`ß` becomes `SS`)
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Lowercase every character using the full Unicode mapping
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Trim every line, rejoin with `\n`, then trim the whole result.
///
/// Any line terminator (`\n`, `\r\n`, `\r`) is normalized to `\n`.
pub fn strip_text(text: &str) -> String {
    let joined = split_lines(text)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    joined.trim().to_string()
}

/// Replace all non-overlapping occurrences of `old`, scanning left to right.
///
/// An empty `old` leaves the text unchanged.
pub fn replace_text(text: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return text.to_string();
    }
    text.replace(old, new)
}

/// Count non-overlapping occurrences of `sub`, scanning left to right.
///
/// An empty `sub` counts as zero occurrences.
pub fn count_substring(text: &str, sub: &str) -> usize {
    if sub.is_empty() {
        return 0;
    }
    text.matches(sub).count()
}

/// Iterator over the lines of a text
///
/// Recognizes `\n`, `\r\n` and a lone `\r` as terminators. The terminator is
/// not part of the yielded line, and a final terminator does not produce an
/// extra empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(idx) => {
                let line = &self.rest[..idx];
                let after = &self.rest[idx..];
                let terminator_len = if after.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &after[terminator_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Split text into lines (see [`Lines`])
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// First `n` lines of the text, fewer if the text is shorter
pub fn get_preview_lines(text: &str, n: usize) -> Vec<&str> {
    split_lines(text).take(n).collect()
}

/// Line, word and character counts of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub lines: usize,
    pub words: usize,
    /// Unicode scalar values, including line terminators
    pub chars: usize,
}

impl TextStats {
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.lines, self.words, self.chars)
    }
}

impl std::fmt::Display for TextStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lines: {}  Words: {}  Chars: {}",
            self.lines, self.words, self.chars
        )
    }
}

/// Compute line, word and character counts
pub fn get_stats(text: &str) -> TextStats {
    let (lines, words) = split_lines(text).fold((0, 0), |(lines, words), line| {
        (lines + 1, words + line.split_whitespace().count())
    });

    TextStats {
        lines,
        words,
        chars: text.chars().count(),
    }
}
