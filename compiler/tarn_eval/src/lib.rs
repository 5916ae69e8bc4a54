//! Tarn Eval - statement-execution core of the Tarn scripting language.
//!
//! Executes the statement forms of a parsed program against a scope:
//! compound blocks, `if`/`elif`/`else`, `for` and `foreach` loops,
//! assignment in all its target shapes, and `return`. Loops, functions and
//! the block executor communicate through [`Outcome`] signals rather than
//! unwinding.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values with the copy/alias split between value
//!   types and reference types
//! - [`Scope`] / [`LocalScope`]: lexical scope chain
//! - [`ConstructStack`]: enclosing `if`/`for`/`func` constructs, owned by
//!   each [`Interpreter`]
//! - [`Interpreter`]: the executors, configured with [`InterpreterBuilder`]
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator dispatch
//!
//! Programs are built with `tarn_ir::AstBuilder` or by an external parser.

pub mod context_stack;
pub mod diagnostics;
mod environment;
pub mod errors;
mod eval_mode;
pub mod exec;
pub mod interpreter;
mod operators;
mod print_handler;
pub mod value;

#[cfg(test)]
mod tests;

use std::sync::Once;

pub use context_stack::{ConstructKind, ConstructStack, ScanPolicy};
pub use environment::{LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalNote, EvalResult, Severity};
pub use eval_mode::EvalMode;
pub use exec::{ExecResult, Outcome};
pub use interpreter::{ConstructGuard, Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{DictEntry, Heap, Value};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call has any
/// effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
