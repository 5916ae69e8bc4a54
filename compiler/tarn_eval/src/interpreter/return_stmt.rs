//! `return`.

use tarn_ir::Expr;

use super::Interpreter;
use crate::environment::{LocalScope, Scope};
use crate::exec::{ExecResult, Outcome};
use crate::value::Value;

impl Interpreter<'_> {
    /// No results return Empty, one returns its value, several return a
    /// tuple in source order.
    pub fn exec_return(&mut self, results: &[Expr], scope: &LocalScope<Scope>) -> ExecResult {
        let value = match results {
            [] => Value::Empty,
            [single] => self.eval_expr(single, scope)?,
            many => {
                let items = many
                    .iter()
                    .map(|expr| self.eval_expr(expr, scope).map(|v| v.for_binding()))
                    .collect::<Result<Vec<_>, _>>()?;
                Value::tuple(items)
            }
        };
        Ok(Outcome::Return(value))
    }
}
