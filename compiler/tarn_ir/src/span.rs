//! Source positions.

use std::fmt;

/// Line/column position of a node in its source unit.
///
/// The file is not stored per node: an interpreter runs one source unit at
/// a time and knows its label (a path, or `<stdin>` for interactive input).
/// Lines and columns are 1-based; `Span::DUMMY` marks synthesized nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Position for nodes that did not come from source text.
    pub const DUMMY: Span = Span { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Span { line, column }
    }

    /// Whether this span came from real source text.
    #[inline]
    pub const fn is_dummy(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
