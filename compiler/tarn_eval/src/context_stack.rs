//! Stack of enclosing constructs.
//!
//! Every `if`, loop and function call pushes a frame on entry and pops it
//! on exit. Before `break`/`continue` (which need a loop) or `return` (which
//! needs a function) runs, the block executor asks whether the required
//! construct encloses the statement.
//!
//! The stack belongs to one interpreter. Two interpreters never observe each
//! other's frames.

use std::fmt;

use tarn_ir::StmtKind;

/// Kind of an enclosing construct.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    If,
    /// Both `for` and `foreach` loops.
    For,
    Func,
}

impl ConstructKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstructKind::If => "if",
            ConstructKind::For => "for",
            ConstructKind::Func => "func",
        }
    }

    /// Construct a control statement must be nested in, if it is one.
    pub fn required_by(stmt: &StmtKind) -> Option<ConstructKind> {
        match stmt {
            StmtKind::Break | StmtKind::Continue => Some(ConstructKind::For),
            StmtKind::Return(_) => Some(ConstructKind::Func),
            _ => None,
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How [`ConstructStack::encloses`] searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Scan without modifying the stack.
    #[default]
    Peek,
    /// Pop frames while searching, stopping at the match. Frames above the
    /// match are lost, and the construct guards that later pop them remove
    /// unrelated frames instead. Kept so programs that depended on the old
    /// behavior can opt into it.
    Drain,
}

/// Per-interpreter stack of enclosing constructs.
#[derive(Clone, Debug, Default)]
pub struct ConstructStack {
    frames: Vec<ConstructKind>,
    policy: ScanPolicy,
}

impl ConstructStack {
    pub fn new(policy: ScanPolicy) -> Self {
        ConstructStack {
            frames: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> ScanPolicy {
        self.policy
    }

    #[inline]
    pub fn push(&mut self, kind: ConstructKind) {
        self.frames.push(kind);
    }

    /// Pop the innermost frame. Popping an empty stack is a no-op.
    #[inline]
    pub fn pop(&mut self) -> Option<ConstructKind> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames from outermost to innermost.
    pub fn frames(&self) -> &[ConstructKind] {
        &self.frames
    }

    pub fn innermost(&self) -> Option<ConstructKind> {
        self.frames.last().copied()
    }

    /// Whether a `kind` frame is on the stack, searching from the top.
    pub fn encloses(&mut self, kind: ConstructKind) -> bool {
        match self.policy {
            ScanPolicy::Peek => self.frames.iter().rev().any(|&frame| frame == kind),
            ScanPolicy::Drain => {
                while let Some(frame) = self.frames.last().copied() {
                    if frame == kind {
                        return true;
                    }
                    tracing::warn!(
                        dropped = %frame,
                        looking_for = %kind,
                        "construct frame discarded during scan"
                    );
                    self.frames.pop();
                }
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
