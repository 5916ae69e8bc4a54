//! Source-like rendering of expressions for diagnostics.

use std::fmt;

use super::expr::{Expr, ExprKind};
use crate::StringInterner;

/// `Display` adapter pairing an expression with the interner that can
/// resolve its names. Used for messages such as "`[1, 2].x` is not iterable".
pub struct ExprDisplay<'a> {
    expr: &'a Expr,
    interner: &'a StringInterner,
}

impl Expr {
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ExprDisplay<'a> {
        ExprDisplay {
            expr: self,
            interner,
        }
    }
}

impl ExprDisplay<'_> {
    fn child<'b>(&'b self, expr: &'b Expr) -> ExprDisplay<'b> {
        ExprDisplay {
            expr,
            interner: self.interner,
        }
    }

    fn list(&self, f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.child(item))?;
        }
        Ok(())
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |n| self.interner.lookup(n);
        match &self.expr.kind {
            ExprKind::Int(n) => write!(f, "{n}"),
            ExprKind::Double(d) => write!(f, "{d}"),
            ExprKind::Bool(b) => write!(f, "{b}"),
            ExprKind::Str(s) => write!(f, "{:?}", name(*s)),
            ExprKind::Nil => write!(f, "nil"),
            ExprKind::Ident(n) => write!(f, "{}", name(*n)),
            ExprKind::Tuple(items) => {
                write!(f, "(")?;
                self.list(f, items)?;
                write!(f, ")")
            }
            ExprKind::List(items) => {
                write!(f, "[")?;
                self.list(f, items)?;
                write!(f, "]")
            }
            ExprKind::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", self.child(k), self.child(v))?;
                }
                write!(f, "}}")
            }
            ExprKind::Unary { op, operand } => {
                write!(f, "{}{}", op.as_symbol(), self.child(operand))
            }
            ExprKind::Binary { op, left, right } => write!(
                f,
                "{} {} {}",
                self.child(left),
                op.as_symbol(),
                self.child(right)
            ),
            ExprKind::Index { collection, index } => {
                write!(f, "{}[{}]", self.child(collection), self.child(index))
            }
            ExprKind::Attribute { object, member } => {
                write!(f, "{}.{}", self.child(object), name(*member))
            }
            ExprKind::Call { func, args } => {
                write!(f, "{}(", name(*func))?;
                self.list(f, args)?;
                write!(f, ")")
            }
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => {
                write!(f, "{}.{}(", self.child(receiver), name(*method))?;
                self.list(f, args)?;
                write!(f, ")")
            }
        }
    }
}
