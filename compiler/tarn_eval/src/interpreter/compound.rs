//! Compound statements.
//!
//! A local block (function bodies, loop bodies, branch bodies, nested
//! blocks) runs its statements until one produces a control signal, which
//! becomes the block's outcome. Before a `break`, `continue` or `return`
//! runs, the construct it needs must enclose it.
//!
//! The global block is a program's top level. It never passes signals on,
//! and in interactive mode it echoes the value of each bare expression.

use tarn_ir::{Block, Stmt, StmtKind};

use super::Interpreter;
use crate::context_stack::ConstructKind;
use crate::environment::{LocalScope, Scope};
use crate::errors::{illegal_control_flow, EvalError, EvalNote};
use crate::exec::{ExecResult, Outcome};

impl Interpreter<'_> {
    pub fn exec_local_block(&mut self, block: &Block, scope: &LocalScope<Scope>) -> ExecResult {
        for stmt in &block.stmts {
            self.check_control_legality(stmt)?;
            match self.exec_stmt(stmt, scope)? {
                Outcome::Running => {}
                signal => return Ok(signal),
            }
        }
        Ok(Outcome::Running)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(statements = block.len()))]
    pub fn exec_global_block(
        &mut self,
        block: &Block,
        scope: &LocalScope<Scope>,
    ) -> Result<(), EvalError> {
        for stmt in &block.stmts {
            self.check_control_legality(stmt)?;
            if let StmtKind::Expr(expr) = &stmt.kind {
                let value = self
                    .eval_expr(expr, scope)
                    .map_err(|err| err.with_span(stmt.span))?;
                if self.mode.echoes_results() && !value.is_empty() {
                    let text = value.to_string();
                    if text != "nil" {
                        self.print_handler.println(&text);
                    }
                }
            } else {
                // Signals cannot be consumed here; the legality check keeps
                // them from reaching this point unless a caller pushed frames.
                self.exec_stmt(stmt, scope)?;
            }
        }
        Ok(())
    }

    /// Run a clause of a construct: a `for` init or post statement, or an
    /// `if` branch initializer. A clause that ends with a control signal is
    /// rejected instead of being dropped.
    pub(crate) fn exec_clause(
        &mut self,
        stmt: &Stmt,
        scope: &LocalScope<Scope>,
    ) -> Result<(), EvalError> {
        let outcome = self.exec_stmt(stmt, scope)?;
        match outcome.signal() {
            None => Ok(()),
            Some((keyword, required)) => Err(illegal_control_flow(keyword, required.as_str())
                .with_note(EvalNote::new(
                    "control statements cannot appear in a loop or branch clause",
                ))
                .with_span(stmt.span)),
        }
    }

    /// Fails with `IllegalControlFlow` if `stmt` is a control statement
    /// outside the construct it requires.
    fn check_control_legality(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        let (Some(keyword), Some(required)) = (
            stmt.kind.control_keyword(),
            ConstructKind::required_by(&stmt.kind),
        ) else {
            return Ok(());
        };
        if self.constructs.encloses(required) {
            Ok(())
        } else {
            Err(illegal_control_flow(keyword, required.as_str()).with_span(stmt.span))
        }
    }
}
