//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{Name, Span, Spanned};

/// Expression node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Re-position this node.
    #[must_use]
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.span = Span::new(line, column);
        self
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression kinds.
///
/// `Tuple` doubles as the destructuring pattern on the left of an
/// assignment; `Ident`, `Index` and `Attribute` are the other assignable
/// shapes.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Int(i64),
    Double(f64),
    Bool(bool),
    Str(Name),
    /// The empty value.
    Nil,

    Ident(Name),

    Tuple(Vec<Expr>),
    List(Vec<Expr>),
    Dict(Vec<(Expr, Expr)>),

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `collection[index]`
    Index {
        collection: Box<Expr>,
        index: Box<Expr>,
    },
    /// `object.member`
    Attribute {
        object: Box<Expr>,
        member: Name,
    },

    /// Call of a named function (built-in or user-defined).
    Call {
        func: Name,
        args: Vec<Expr>,
    },
    /// `receiver.method(args)`
    MethodCall {
        receiver: Box<Expr>,
        method: Name,
        args: Vec<Expr>,
    },
}

impl ExprKind {
    /// If this is a call to the function `name`, its raw argument nodes.
    pub fn as_call_to(&self, name: Name) -> Option<&[Expr]> {
        match self {
            ExprKind::Call { func, args } if *func == name => Some(args),
            _ => None,
        }
    }
}
