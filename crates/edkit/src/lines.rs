use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;
use thiserror::Error;

use crate::CodeUnit;

/// A 1-based line number.
pub type RecNo = usize;

/// Why a line could not be fetched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The file has no lines at all; asking for its first line lands here.
    #[error("file is empty")]
    EmptyFile,
    /// The file has lines, but not this one.
    #[error("unable to retrieve line {0}")]
    NotFound(RecNo),
    /// The storage itself failed.
    #[error("line storage failed: {0}")]
    Storage(String),
}

impl LineError {
    /// `true` when the fetch failed only because there is nothing to fetch.
    #[must_use]
    pub fn is_empty_file(&self) -> bool {
        matches!(self, LineError::EmptyFile)
    }
}

/// Read access to the lines of a file.
pub trait LineSource {
    /// Code unit the lines are stored in.
    type Unit: CodeUnit;

    /// The content of line `lno`, without its line terminator.
    ///
    /// # Errors
    ///
    /// [`LineError::EmptyFile`] when the file is empty and `lno` is 0 or 1,
    /// otherwise any other [`LineError`].
    fn fetch_line(&self, lno: RecNo) -> Result<&[Self::Unit], LineError>;
}

/// Lines held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemLines<C> {
    lines: Vec<Vec<C>>,
}

impl<C> Default for MemLines<C> {
    fn default() -> Self {
        Self { lines: Vec::new() }
    }
}

impl<C: CodeUnit> MemLines<C> {
    /// An empty file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<Vec<C>>) {
        self.lines.push(line.into());
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` for an empty file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl MemLines<u8> {
    /// Split `text` on `\n`. A trailing newline does not start another line.
    #[must_use]
    pub fn from_bytes(text: &[u8]) -> Self {
        let lines = text
            .lines_with_terminator()
            .map(|line| line.strip_suffix(b"\n").unwrap_or(line).to_vec())
            .collect();
        Self { lines }
    }
}

impl MemLines<char> {
    /// Split `text` on `\n` into wide lines. A trailing newline does not start
    /// another line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split_inclusive('\n')
            .map(|line| line.strip_suffix('\n').unwrap_or(line).chars().collect())
            .collect();
        Self { lines }
    }
}

impl<C: CodeUnit> LineSource for MemLines<C> {
    type Unit = C;

    fn fetch_line(&self, lno: RecNo) -> Result<&[C], LineError> {
        if let Some(line) = lno.checked_sub(1).and_then(|i| self.lines.get(i)) {
            return Ok(line);
        }
        if self.lines.is_empty() && lno <= 1 {
            return Err(LineError::EmptyFile);
        }
        Err(LineError::NotFound(lno))
    }
}
