//! Assignment.
//!
//! The target's shape picks the strategy:
//!
//! | Target        | Behavior                                               |
//! |---------------|--------------------------------------------------------|
//! | `x`           | scope-chain write; `_` discards without evaluating     |
//! | `a, b`        | destructure a tuple of equal arity, element by element |
//! | `c[i]`        | list element or dict slot; strings and tuples refuse   |
//! | `obj.member`  | instance member; `_private` only through `this`        |
//!
//! Compound operators (`+=` and friends) read the current value, combine it
//! with the source and write the result. Destructuring is not
//! transactional: elements assigned before a failing one keep their values.

use tarn_ir::{AssignOp, BinaryOp, Expr, ExprKind, Name, Span};

use super::Interpreter;
use crate::environment::{LocalScope, Scope};
use crate::errors::{
    arity_mismatch, expected_tuple, illegal_operator, immutable_target, index_out_of_bounds,
    invalid_index, key_not_found, no_such_member, not_assignable, EvalError, EvalResult,
};
use crate::exec::{ExecResult, Outcome};
use crate::operators::evaluate_binary;
use crate::value::{DictEntry, Heap, Value};

/// Right-hand side of an assignment: an expression still to evaluate, or a
/// tuple element already produced by destructuring.
enum Source<'e> {
    Expr(&'e Expr),
    Value(Value),
}

impl Interpreter<'_> {
    pub fn exec_assign(
        &mut self,
        target: &Expr,
        op: AssignOp,
        source: &Expr,
        span: Span,
        scope: &LocalScope<Scope>,
    ) -> ExecResult {
        self.assign_to(target, op, Source::Expr(source), span, scope)?;
        Ok(Outcome::Running)
    }

    fn assign_to(
        &mut self,
        target: &Expr,
        op: AssignOp,
        source: Source<'_>,
        span: Span,
        scope: &LocalScope<Scope>,
    ) -> Result<(), EvalError> {
        match &target.kind {
            ExprKind::Ident(name) => self.assign_variable(*name, op, source, scope),
            ExprKind::Tuple(patterns) => self.assign_tuple(patterns, op, source, span, scope),
            ExprKind::Index { collection, index } => {
                self.assign_index(collection, index, op, source, scope)
            }
            ExprKind::Attribute { object, member } => {
                self.assign_attribute(object, *member, op, source, scope)
            }
            _ => {
                let shown = target.display(self.interner).to_string();
                Err(not_assignable(&shown).with_span(target.span))
            }
        }
    }

    fn resolve(&mut self, source: Source<'_>, scope: &LocalScope<Scope>) -> EvalResult {
        match source {
            Source::Expr(expr) => self.eval_expr(expr, scope),
            Source::Value(value) => Ok(value),
        }
    }

    fn assign_variable(
        &mut self,
        name: Name,
        op: AssignOp,
        source: Source<'_>,
        scope: &LocalScope<Scope>,
    ) -> Result<(), EvalError> {
        if self.is_discard(name) {
            return Ok(());
        }
        let value = self.resolve(source, scope)?;
        let value = match op.binary_op() {
            None => value,
            Some(bin_op) => {
                let current = self.read_var(name, scope)?;
                evaluate_binary(current, value, bin_op)?
            }
        };
        self.write_var(name, &value, scope);
        Ok(())
    }

    fn assign_tuple(
        &mut self,
        patterns: &[Expr],
        op: AssignOp,
        source: Source<'_>,
        span: Span,
        scope: &LocalScope<Scope>,
    ) -> Result<(), EvalError> {
        if op.is_compound() {
            return Err(illegal_operator(op.as_symbol()).with_span(span));
        }
        let value = self.resolve(source, scope)?;
        let Value::Tuple(items) = &value else {
            return Err(expected_tuple(value.type_name()).with_span(span));
        };
        if items.len() != patterns.len() {
            return Err(arity_mismatch(patterns.len(), items.len()).with_span(span));
        }
        for (pattern, item) in patterns.iter().zip(items.iter()) {
            self.assign_to(pattern, AssignOp::Assign, Source::Value(item.clone()), span, scope)?;
        }
        Ok(())
    }

    fn assign_index(
        &mut self,
        collection: &Expr,
        index: &Expr,
        op: AssignOp,
        source: Source<'_>,
        scope: &LocalScope<Scope>,
    ) -> Result<(), EvalError> {
        let container = self.eval_expr(collection, scope)?;
        match &container {
            Value::Str(_) | Value::Tuple(_) => {
                Err(immutable_target(container.type_name()).with_span(collection.span))
            }
            Value::List(items) => {
                let position = match self.eval_expr(index, scope)? {
                    Value::Int(position) => position,
                    other => return Err(invalid_index(other.type_name()).with_span(index.span)),
                };
                let value = self.resolve(source, scope)?;
                assign_list_element(items, position, value, op.binary_op())
                    .map_err(|err| err.with_span(index.span))
            }
            Value::Dict(map) => {
                let key = self.eval_expr(index, scope)?;
                let value = self.resolve(source, scope)?;
                let slot = key.dict_key();
                let value = match op.binary_op() {
                    None => value,
                    Some(bin_op) => {
                        let current = map.borrow().get(&slot).map(|entry| entry.value.clone());
                        let current =
                            current.ok_or_else(|| key_not_found(&slot).with_span(index.span))?;
                        evaluate_binary(current, value, bin_op)?
                    }
                };
                map.borrow_mut().insert(
                    slot,
                    DictEntry {
                        key,
                        value: value.for_binding(),
                    },
                );
                Ok(())
            }
            _ => {
                let shown = collection.display(self.interner).to_string();
                Err(not_assignable(&format!("{shown}[..]")).with_span(collection.span))
            }
        }
    }

    fn assign_attribute(
        &mut self,
        object: &Expr,
        member: Name,
        op: AssignOp,
        source: Source<'_>,
        scope: &LocalScope<Scope>,
    ) -> Result<(), EvalError> {
        let receiver = self.eval_expr(object, scope)?;
        let member_name = self.interner.lookup(member);
        match &receiver {
            Value::Instance(instance) => {
                if !self.member_accessible(object, member) {
                    let owner = object.display(self.interner).to_string();
                    return Err(no_such_member(&owner, member_name).with_span(object.span));
                }
                let value = self.resolve(source, scope)?;
                let value = match op.binary_op() {
                    None => value,
                    Some(bin_op) => {
                        let current = instance.member(member).ok_or_else(|| {
                            let owner = object.display(self.interner).to_string();
                            no_such_member(&owner, member_name).with_span(object.span)
                        })?;
                        evaluate_binary(current, value, bin_op)?
                    }
                };
                instance
                    .members
                    .borrow_mut()
                    .define(member, value.for_binding());
                Ok(())
            }
            Value::Class(class) => Err(no_such_member(class.name, member_name).with_span(object.span)),
            _ => {
                let shown = object.display(self.interner).to_string();
                Err(not_assignable(&format!("{shown}.{member_name}")).with_span(object.span))
            }
        }
    }

    /// Members whose name starts with `_` are only reachable through the
    /// literal receiver reference `this`.
    pub(crate) fn member_accessible(&self, object: &Expr, member: Name) -> bool {
        if !self.interner.lookup(member).starts_with('_') {
            return true;
        }
        matches!(object.kind, ExprKind::Ident(name) if name == self.names.this)
    }
}

fn assign_list_element(
    items: &Heap<Vec<Value>>,
    position: i64,
    value: Value,
    combine: Option<BinaryOp>,
) -> Result<(), EvalError> {
    let len = items.borrow().len();
    let slot = usize::try_from(position)
        .ok()
        .filter(|&slot| slot < len)
        .ok_or_else(|| index_out_of_bounds(position, len))?;
    let value = match combine {
        None => value,
        Some(bin_op) => {
            let current = items.borrow()[slot].clone();
            evaluate_binary(current, value, bin_op)?
        }
    };
    items.borrow_mut()[slot] = value.for_binding();
    Ok(())
}
