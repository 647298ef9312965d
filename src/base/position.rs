/// A position in document text, 0-indexed to match the LSP coordinate
/// space the host speaks. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A range in document text, addressed by start/end positions.
///
/// Diagnostics and quick-fix edits carry these; the host maps them onto
/// its own text buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Zero-width span at one position; an edit with a caret span is an
    /// insertion.
    pub fn caret(at: Position) -> Self {
        Self::new(at, at)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
