//! # Document
//!
//! The immutable text being viewed, as an ordered list of lines.
//!
//! Loading reads the whole file and splits on `\n` only. A trailing newline
//! produces a final empty line, and an empty file produces a single empty line,
//! so a `Document` is never empty:
//!
//! ```text
//! "a\nb\nc"  →  ["a", "b", "c"]
//! "a\nb\n"   →  ["a", "b", ""]
//! ""         →  [""]
//! ```
//!
//! Column arithmetic everywhere in the crate is in code points, so each `Line`
//! caches its code point count.

use log::info;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A single line of text with its length in code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    len: usize,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self { text, len }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in code points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Code points `[start, start + width)`, clipped to the line.
    pub fn slice(&self, start: usize, width: usize) -> impl Iterator<Item = char> {
        self.text.chars().skip(start).take(width)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

#[derive(Debug)]
pub enum DocumentError {
    Read { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Read { source, .. } => Some(source),
        }
    }
}

impl Document {
    /// Read `path` fully and split it into lines.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_bytes(&bytes);
        info!(
            "Loaded {} ({} bytes, {} lines)",
            path.display(),
            bytes.len(),
            document.len()
        );
        Ok(document)
    }

    /// Split raw bytes on `\n`. Invalid UTF-8 is replaced, `\r` is kept.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let lines = bytes
            .split(|&b| b == b'\n')
            .map(|raw| Line::new(String::from_utf8_lossy(raw)))
            .collect();
        Self { lines }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<Line> = lines.into_iter().map(Line::new).collect();
        if lines.is_empty() {
            lines.push(Line::new(""));
        }
        Self { lines }
    }

    /// Number of lines, always at least 1.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Never true for a loaded document.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Code point length of line `index`, 0 when out of range.
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, Line::len)
    }

    /// Length of the longest line, used to bound horizontal scrolling.
    pub fn max_line_len(&self) -> usize {
        self.lines.iter().map(Line::len).max().unwrap_or(0)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}
