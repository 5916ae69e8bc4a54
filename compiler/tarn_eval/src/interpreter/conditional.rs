//! `if` / `elif` / `else`.

use tarn_ir::IfStmt;

use super::Interpreter;
use crate::context_stack::ConstructKind;
use crate::environment::{LocalScope, Scope};
use crate::exec::{ExecResult, Outcome};

impl Interpreter<'_> {
    /// Runs the body of the first branch whose condition holds. Each
    /// branch's initializer runs just before its condition, and only if
    /// every earlier condition was false.
    pub fn exec_if(&mut self, stmt: &IfStmt, scope: &LocalScope<Scope>) -> ExecResult {
        self.within(ConstructKind::If, |interp| -> ExecResult {
            for branch in stmt.branches() {
                if let Some(init) = &branch.init {
                    interp.exec_clause(init, scope)?;
                }
                if interp.eval_expr(&branch.cond, scope)?.is_truthy() {
                    return interp.exec_local_block(&branch.body, scope);
                }
            }
            Ok(Outcome::Running)
        })
    }
}
