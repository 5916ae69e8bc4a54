//! `for` and `foreach` loops.
//!
//! Both push a `for` frame for their whole duration. The body's outcome is
//! reduced with [`to_loop_action`]: `break` ends the loop normally,
//! `continue` moves on, `return` leaves the loop and keeps propagating.

use tarn_ir::{Block, Expr, Name, Stmt};

use super::builtins::range_bounds;
use super::Interpreter;
use crate::context_stack::ConstructKind;
use crate::environment::{LocalScope, Scope};
use crate::errors::{not_iterable, range_arg_count, EvalError};
use crate::exec::{to_loop_action, ExecResult, LoopAction, Outcome};
use crate::value::Value;

impl Interpreter<'_> {
    /// Three-clause loop. A missing condition never stops the loop; the post
    /// clause runs after `continue` but not after `break` or `return`.
    pub fn exec_for(
        &mut self,
        init: Option<&Stmt>,
        cond: Option<&Expr>,
        post: Option<&Stmt>,
        body: &Block,
        scope: &LocalScope<Scope>,
    ) -> ExecResult {
        self.within(ConstructKind::For, |interp| -> ExecResult {
            if let Some(init) = init {
                interp.exec_clause(init, scope)?;
            }
            loop {
                if let Some(cond) = cond {
                    if !interp.eval_expr(cond, scope)?.is_truthy() {
                        break;
                    }
                }
                match to_loop_action(interp.exec_local_block(body, scope)?) {
                    LoopAction::Next => {}
                    LoopAction::Exit => break,
                    LoopAction::Propagate(outcome) => return Ok(outcome),
                }
                if let Some(post) = post {
                    interp.exec_clause(post, scope)?;
                }
            }
            Ok(Outcome::Running)
        })
    }

    /// `foreach first, second := iterable { body }`.
    ///
    /// A literal call to `list` iterates an integer range directly, without
    /// building the tuple the built-in would return.
    pub fn exec_foreach(
        &mut self,
        first: Name,
        second: Name,
        iterable: &Expr,
        body: &Block,
        scope: &LocalScope<Scope>,
    ) -> ExecResult {
        self.within(ConstructKind::For, |interp| -> ExecResult {
            if let Some(args) = iterable.kind.as_call_to(interp.names.list) {
                let (start, stop) = interp
                    .eval_range_args(args, scope)
                    .map_err(|err| err.with_span(iterable.span))?;
                for index in 0..stop.saturating_sub(start).max(0) {
                    let pair = (Value::Int(index), Value::Int(start + index));
                    match interp.run_iteration(first, second, pair, body, scope)? {
                        LoopAction::Next => {}
                        LoopAction::Exit => break,
                        LoopAction::Propagate(outcome) => return Ok(outcome),
                    }
                }
                return Ok(Outcome::Running);
            }

            let value = interp.eval_expr(iterable, scope)?;
            let Some((keys, values)) = value.iteration_pairs() else {
                let shown = iterable.display(interp.interner).to_string();
                return Err(not_iterable(&shown).with_span(iterable.span));
            };
            for pair in keys.into_iter().zip(values) {
                match interp.run_iteration(first, second, pair, body, scope)? {
                    LoopAction::Next => {}
                    LoopAction::Exit => break,
                    LoopAction::Propagate(outcome) => return Ok(outcome),
                }
            }
            Ok(Outcome::Running)
        })
    }

    fn run_iteration(
        &mut self,
        first: Name,
        second: Name,
        (key, value): (Value, Value),
        body: &Block,
        scope: &LocalScope<Scope>,
    ) -> Result<LoopAction, EvalError> {
        self.write_var(first, &key, scope);
        self.write_var(second, &value, scope);
        Ok(to_loop_action(self.exec_local_block(body, scope)?))
    }

    /// Evaluate the raw arguments of a `list(..)` range in a `foreach`
    /// header into `(start, stop)`.
    fn eval_range_args(
        &mut self,
        args: &[Expr],
        scope: &LocalScope<Scope>,
    ) -> Result<(i64, i64), EvalError> {
        if !matches!(args.len(), 1 | 2) {
            return Err(range_arg_count(args.len()));
        }
        let values = args
            .iter()
            .map(|arg| self.eval_expr(arg, scope))
            .collect::<Result<Vec<_>, _>>()?;
        let interner = self.interner;
        range_bounds(&values, |i| args[i].display(interner).to_string())
    }
}
