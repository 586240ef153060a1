// Thu Aug 27 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based (row, column) position inside a source file. Ordering is
/// lexicographic, row first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SourcePos {
    pub row: u32,
    pub col: u32,
}

impl SourcePos {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Inclusive source range, both endpoints belong to the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: SourcePos,
    pub end: SourcePos,
}

impl SourceRange {
    pub fn new(start: SourcePos, end: SourcePos) -> Self {
        Self { start, end }
    }

    pub fn spanning(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self::new(
            SourcePos::new(start_row, start_col),
            SourcePos::new(end_row, end_col),
        )
    }

    pub fn contains(&self, pos: SourcePos) -> bool {
        self.start <= pos && pos <= self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}
