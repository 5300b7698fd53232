//! Position tracking for syntax nodes and tokens.
//!
//! Positions are 1-based in both line and column. The editor boundary
//! (0-based) is converted in `ide::analysis`.

/// A position in source code (1-indexed).
///
/// The token index orders positions that share a line and column, which
/// happens for zero-width tokens. Field order defines the total order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub token_index: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            token_index: 0,
        }
    }

    pub fn with_token_index(mut self, token_index: u32) -> Self {
        self.token_index = token_index;
        self
    }

    /// Line and column only, for containment tests.
    fn coords(&self) -> (u32, u32) {
        (self.line, self.column)
    }
}

/// A range in source code.
///
/// Ordered by start (line, column, token index), then end. This is the key
/// order of the reference index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a range from line/column coordinates
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// The `(1,1)-(1,1)` range used for whole-file targets.
    pub fn file_start() -> Self {
        Self::from_coords(1, 1, 1, 1)
    }

    /// Check if a position falls within this range: `[start, end)`.
    pub fn contains(&self, position: Position) -> bool {
        self.start.coords() <= position.coords() && position.coords() < self.end.coords()
    }

    /// Check if a position falls within this range, end included.
    ///
    /// Used by completion, where the cursor usually sits right after the
    /// word being typed.
    pub fn contains_inclusive(&self, position: Position) -> bool {
        self.start.coords() <= position.coords() && position.coords() <= self.end.coords()
    }

    /// The single-line range `[start, start + len)` keeping the start token index.
    pub fn narrowed(&self, len: u32) -> Self {
        let end = Position {
            line: self.start.line,
            column: self.start.column + len,
            token_index: self.start.token_index,
        };
        Self {
            start: self.start,
            end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.coords() >= self.end.coords()
    }
}
