//! Evaluation errors.
//!
//! Every failure the core can produce is an `EvalError` built by one of the
//! factory functions below, then located with `with_span`. Errors travel as
//! ordinary `Result` values: each executor that receives one aborts its own
//! work and returns it unchanged.
//!
//! # Severity
//!
//! Fatal errors mean the program as written cannot run (bad range arguments,
//! destructuring arity, non-integer list index, compound operator on a tuple
//! pattern). Hosts report them with their location and stop. Recoverable
//! errors are handed to whatever invoked the executor, which may continue.

use std::fmt;

use tarn_ir::Span;

use crate::value::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Whether an error halts the run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Recoverable,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Recoverable => "error",
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Control flow
    #[error("`{statement}` is not allowed outside a `{required}` construct")]
    IllegalControlFlow {
        statement: &'static str,
        required: &'static str,
    },

    // Assignment targets
    #[error("cannot assign to `{target}`")]
    NotAssignable { target: String },
    #[error("cannot assign into an element of immutable {type_name}")]
    ImmutableTarget { type_name: String },
    #[error("list index must be int, got {type_name}")]
    InvalidIndex { type_name: String },
    #[error("no member `{member}` on `{owner}`")]
    NoSuchMember { owner: String, member: String },
    #[error("operator `{op}` cannot be used on a tuple pattern")]
    IllegalOperator { op: &'static str },
    #[error("tuple pattern binds {expected} names but the value has {got} elements")]
    ArityMismatch { expected: usize, got: usize },
    #[error("cannot destructure {got}: expected tuple")]
    ExpectedTuple { got: String },

    // Iteration and ranges
    #[error("`{expr}` does not support foreach")]
    NotIterable { expr: String },
    #[error("`list` takes 1 or 2 arguments, got {got}")]
    RangeArgCount { got: usize },
    #[error("`list` bound must be int: `{arg}`")]
    RangeBoundNotInt { arg: String },

    // Access
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },
    #[error("{type_name} is not callable")]
    NotCallable { type_name: String },
    #[error("{name} expects {expected} arguments, got {got}")]
    WrongArgCount {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
    #[error("cannot index {type_name}")]
    CannotIndex { type_name: String },

    // Operators
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    BinaryTypeMismatch {
        op: &'static str,
        left: String,
        right: String,
    },
    #[error("operator `{op}` cannot be applied to {operand}")]
    InvalidUnaryOp { op: &'static str, operand: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("{message}")]
    Custom { message: String },
}

impl EvalErrorKind {
    pub fn severity(&self) -> Severity {
        match self {
            Self::ArityMismatch { .. }
            | Self::IllegalOperator { .. }
            | Self::InvalidIndex { .. }
            | Self::ExpectedTuple { .. }
            | Self::RangeArgCount { .. }
            | Self::RangeBoundNotInt { .. } => Severity::Fatal,
            _ => Severity::Recoverable,
        }
    }
}

/// Secondary information attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
}

impl EvalNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Rendered `kind`, kept so hosts can print without matching.
    pub message: String,
    /// Position of the offending node, once known.
    pub span: Option<Span>,
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    /// Uncategorized error.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Attach a position. The innermost position wins: an error that already
    /// has one keeps it as it propagates outward.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Control flow

pub fn illegal_control_flow(statement: &'static str, required: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IllegalControlFlow {
        statement,
        required,
    })
}

// Assignment

pub fn not_assignable(target: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAssignable {
        target: target.to_string(),
    })
}

pub fn immutable_target(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ImmutableTarget {
        type_name: type_name.to_string(),
    })
}

pub fn invalid_index(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidIndex {
        type_name: type_name.to_string(),
    })
}

pub fn no_such_member(owner: &str, member: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSuchMember {
        owner: owner.to_string(),
        member: member.to_string(),
    })
}

pub fn illegal_operator(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IllegalOperator { op })
}

pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

pub fn expected_tuple(got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpectedTuple {
        got: got.to_string(),
    })
}

// Iteration and ranges

pub fn not_iterable(expr: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIterable {
        expr: expr.to_string(),
    })
}

pub fn range_arg_count(got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RangeArgCount { got })
}

pub fn range_bound_not_int(arg: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RangeBoundNotInt {
        arg: arg.to_string(),
    })
}

// Access

pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount {
        name: name.to_string(),
        expected,
        got,
    })
}

pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

pub fn key_not_found(key: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::KeyNotFound {
        key: key.to_string(),
    })
}

pub fn cannot_index(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotIndex {
        type_name: type_name.to_string(),
    })
}

// Operators

pub fn binary_type_mismatch(op: &'static str, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

pub fn invalid_unary_op(op: &'static str, operand: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp {
        op,
        operand: operand.to_string(),
    })
}

pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}
