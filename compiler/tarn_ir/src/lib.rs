//! Tarn IR - syntax tree types for the statement-execution core.
//!
//! The parser (not part of this workspace) produces these trees; the
//! evaluator in `tarn_eval` only reads them. Contents:
//! - `Span` for line/column positions attached to every node
//! - `Name` and `StringInterner` for interned identifiers
//! - `Expr`/`Stmt` node types and their operators
//! - `AstBuilder` for constructing trees programmatically
//!
//! Nodes are immutable after construction. Function and class definitions
//! are reference counted so runtime values can hold on to them after the
//! enclosing program tree is dropped.

pub mod ast;
mod builder;
mod interner;
mod name;
mod span;

pub use ast::{
    AssignOp, BinaryOp, Block, ClassDef, Expr, ExprDisplay, ExprKind, FunctionDef, IfBranch,
    IfStmt, Stmt, StmtKind, UnaryOp,
};
pub use builder::AstBuilder;
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;

/// Trait for nodes that report their originating source position.
pub trait Spanned {
    fn span(&self) -> Span;
}
