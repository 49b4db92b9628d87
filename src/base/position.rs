//! Line/column conversion for byte offsets.
//!
//! Parse errors carry byte ranges; this index turns them into
//! 0-indexed line/column pairs for display.

use text_size::TextSize;

/// A 0-indexed line/column pair. Columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-indexed for humans
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Maps byte offsets to line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(idx as u32 + 1));
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset into a line/column pair.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        LineCol {
            line: line as u32,
            col: col.into(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
