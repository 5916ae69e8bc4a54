//! Tree-walking statement executor.
//!
//! Each statement form has one executor, spread over the files of this
//! module as separate `impl Interpreter` blocks:
//!
//! - `compound`: local and global blocks, control-statement legality
//! - `conditional`: `if`/`elif`/`else`
//! - `loops`: three-clause `for` and `foreach`
//! - `assign`: plain, compound and destructuring assignment
//! - `return_stmt`: `return`
//! - `expr`, `function_call`, `builtins`: the expression side
//!
//! Every executor takes the scope it runs against as an argument. The
//! interpreter itself only carries configuration, the output sink and the
//! construct stack.

mod assign;
mod builder;
mod builtins;
mod compound;
mod conditional;
mod construct_guard;
mod expr;
mod function_call;
mod interned_names;
mod loops;
mod return_stmt;

pub use builder::InterpreterBuilder;
pub use construct_guard::ConstructGuard;

use interned_names::WellKnownNames;
use tarn_ir::{Block, Name, Stmt, StmtKind, StringInterner};
use tarn_stack::ensure_sufficient_stack;

use crate::context_stack::{ConstructKind, ConstructStack};
use crate::diagnostics;
use crate::environment::{LocalScope, Scope};
use crate::errors::{undefined_variable, EvalError, EvalResult};
use crate::eval_mode::EvalMode;
use crate::exec::{ExecResult, Outcome};
use crate::print_handler::SharedPrintHandler;
use crate::value::Value;

/// Statement executor for one evaluation.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) mode: EvalMode,
    pub(crate) constructs: ConstructStack,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) source_file_path: String,
    pub(crate) names: WellKnownNames,
}

impl<'a> Interpreter<'a> {
    /// Script-mode interpreter writing to stdout.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn source_file_path(&self) -> &str {
        &self.source_file_path
    }

    pub fn constructs(&self) -> &ConstructStack {
        &self.constructs
    }

    /// Enter a construct without a guard. Pair with [`Self::pop_construct`].
    pub fn push_construct(&mut self, kind: ConstructKind) {
        self.constructs.push(kind);
    }

    pub fn pop_construct(&mut self) -> Option<ConstructKind> {
        self.constructs.pop()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Captured output, when printing into a buffer.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }

    /// Run a program: its statements form the global compound statement.
    ///
    /// Fatal errors are logged with their location before being returned;
    /// the host is expected to stop. Recoverable errors are returned as is.
    #[tracing::instrument(level = "debug", skip_all, fields(source = %self.source_file_path))]
    pub fn run_program(&mut self, program: &Block, scope: &LocalScope<Scope>) -> Result<(), EvalError> {
        let result = self.exec_global_block(program, scope);
        if let Err(err) = &result {
            if err.is_fatal() {
                tracing::error!("{}", diagnostics::render(err, &self.source_file_path));
            } else {
                tracing::debug!(error = %err, "program stopped");
            }
        }
        result
    }

    /// Execute one statement.
    #[tracing::instrument(level = "trace", skip_all, fields(line = stmt.span.line))]
    pub fn exec_stmt(&mut self, stmt: &Stmt, scope: &LocalScope<Scope>) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt, scope))
            .map_err(|err| err.with_span(stmt.span))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt, scope: &LocalScope<Scope>) -> ExecResult {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.eval_expr(expr, scope)?;
                Ok(Outcome::Running)
            }
            StmtKind::Assign { target, op, source } => {
                self.exec_assign(target, *op, source, stmt.span, scope)
            }
            StmtKind::Block(block) => self.exec_local_block(block, scope),
            StmtKind::If(if_stmt) => self.exec_if(if_stmt, scope),
            StmtKind::For {
                init,
                cond,
                post,
                body,
            } => self.exec_for(init.as_deref(), cond.as_ref(), post.as_deref(), body, scope),
            StmtKind::Foreach {
                first,
                second,
                iterable,
                body,
            } => self.exec_foreach(*first, *second, iterable, body, scope),
            StmtKind::Break => Ok(Outcome::Break),
            StmtKind::Continue => Ok(Outcome::Continue),
            StmtKind::Return(results) => self.exec_return(results, scope),
            StmtKind::FuncDef(def) => {
                let value = Value::function(
                    self.interner.lookup(def.name),
                    std::sync::Arc::clone(def),
                    scope.clone(),
                );
                scope.borrow_mut().define(def.name, value);
                Ok(Outcome::Running)
            }
            StmtKind::ClassDef(def) => {
                let value = Value::class(
                    self.interner.lookup(def.name),
                    std::sync::Arc::clone(def),
                    scope.clone(),
                );
                scope.borrow_mut().define(def.name, value);
                Ok(Outcome::Running)
            }
        }
    }

    /// Read a variable. The discard name is never readable.
    pub(crate) fn read_var(&self, name: Name, scope: &LocalScope<Scope>) -> EvalResult {
        if name == self.names.discard {
            return Err(undefined_variable(self.interner.lookup(name)));
        }
        scope
            .borrow()
            .lookup(name)
            .ok_or_else(|| undefined_variable(self.interner.lookup(name)))
    }

    /// Write a variable with scope-chain semantics. Writes to the discard
    /// name are dropped.
    pub(crate) fn write_var(&self, name: Name, value: &Value, scope: &LocalScope<Scope>) {
        if name == self.names.discard {
            return;
        }
        scope.borrow_mut().set(name, value.for_binding());
    }

    pub(crate) fn is_discard(&self, name: Name) -> bool {
        name == self.names.discard
    }
}
