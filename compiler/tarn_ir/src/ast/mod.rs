//! Syntax tree nodes.
//!
//! Statements own their children (an `If` owns its branches, a loop owns
//! its body). Every node carries the `Span` the parser attached to it.

mod display;
mod expr;
mod operators;
mod stmt;

pub use display::ExprDisplay;
pub use expr::{Expr, ExprKind};
pub use operators::{AssignOp, BinaryOp, UnaryOp};
pub use stmt::{Block, ClassDef, FunctionDef, IfBranch, IfStmt, Stmt, StmtKind};
