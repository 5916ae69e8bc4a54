//! Statement nodes.

use std::fmt;
use std::sync::Arc;

use super::expr::Expr;
use super::operators::AssignOp;
use crate::{Name, Span, Spanned};

/// Statement node.
#[derive(Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// Re-position this node.
    #[must_use]
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.span = Span::new(line, column);
        self
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// Statement kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// Bare expression evaluated for its value (echoed by the REPL).
    Expr(Expr),

    /// `target op source`. The statement's span is the operator position.
    Assign {
        target: Expr,
        op: AssignOp,
        source: Expr,
    },

    /// Nested local compound statement.
    Block(Block),

    /// `if` / `elif` / `else` chain.
    If(IfStmt),

    /// Three-clause loop: `for init; cond; post { body }`.
    ///
    /// A missing condition never stops the loop.
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        post: Option<Box<Stmt>>,
        body: Block,
    },

    /// `foreach first, second := iterable { body }`
    Foreach {
        first: Name,
        second: Name,
        iterable: Expr,
        body: Block,
    },

    Break,
    Continue,
    Return(Vec<Expr>),

    /// Function declaration; binds the function in the current scope.
    FuncDef(Arc<FunctionDef>),
    /// Class declaration; binds the class in the current scope.
    ClassDef(Arc<ClassDef>),
}

impl StmtKind {
    /// Declarations are silent at the interactive prompt.
    pub fn is_declaration(&self) -> bool {
        matches!(self, StmtKind::FuncDef(_) | StmtKind::ClassDef(_))
    }

    /// Only bare expressions produce a value worth echoing.
    pub fn is_expression(&self) -> bool {
        matches!(self, StmtKind::Expr(_))
    }

    /// Keyword of a control-flow statement, `None` for everything else.
    pub fn control_keyword(&self) -> Option<&'static str> {
        match self {
            StmtKind::Break => Some("break"),
            StmtKind::Continue => Some("continue"),
            StmtKind::Return(_) => Some("return"),
            _ => None,
        }
    }
}

/// Ordered statement list with the position of its opening token.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// Conditional chain. The first branch is mandatory; `else` is an elif
/// whose condition is the literal `true`.
#[derive(Clone, PartialEq, Debug)]
pub struct IfStmt {
    pub first: IfBranch,
    pub elifs: Vec<IfBranch>,
}

impl IfStmt {
    /// All branches in evaluation order.
    pub fn branches(&self) -> impl Iterator<Item = &IfBranch> {
        std::iter::once(&self.first).chain(self.elifs.iter())
    }
}

/// One `if`/`elif` arm with its optional initializer (`if x := f(); x > 0`).
#[derive(Clone, PartialEq, Debug)]
pub struct IfBranch {
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub body: Block,
}

/// User function or method definition.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDef {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Block,
    pub span: Span,
}

/// Class definition: a name and its methods. Fields are created by
/// assignment to `this.field` (typically inside `init`).
#[derive(Clone, PartialEq, Debug)]
pub struct ClassDef {
    pub name: Name,
    pub methods: Vec<Arc<FunctionDef>>,
    pub span: Span,
}

impl ClassDef {
    pub fn method(&self, name: Name) -> Option<&Arc<FunctionDef>> {
        self.methods.iter().find(|m| m.name == name)
    }
}
