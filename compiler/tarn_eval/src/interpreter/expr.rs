//! Expression evaluation.
//!
//! Statements hand every condition, bound, source and sub-target here.
//! `&&` and `||` evaluate their right operand only when needed.

use tarn_ir::{BinaryOp, Expr, ExprKind, Name};
use tarn_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::environment::{LocalScope, Scope};
use crate::errors::{
    cannot_index, index_out_of_bounds, invalid_index, key_not_found, no_such_member, EvalError,
    EvalResult,
};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::value::Value;

impl Interpreter<'_> {
    pub fn eval_expr(&mut self, expr: &Expr, scope: &LocalScope<Scope>) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, scope))
            .map_err(|err| err.with_span(expr.span))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, scope: &LocalScope<Scope>) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Double(d) => Ok(Value::Double(*d)),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Str(s) => Ok(Value::string(self.interner.lookup(*s))),
            ExprKind::Nil => Ok(Value::Empty),
            ExprKind::Ident(name) => self.read_var(*name, scope),

            ExprKind::Tuple(items) => Ok(Value::tuple(self.eval_all(items, scope)?)),
            ExprKind::List(items) => Ok(Value::list(self.eval_all(items, scope)?)),
            ExprKind::Dict(entries) => {
                let mut pairs = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    let key = self.eval_expr(key, scope)?;
                    let value = self.eval_expr(value, scope)?.for_binding();
                    pairs.push((key, value));
                }
                Ok(Value::dict(pairs))
            }

            ExprKind::Unary { op, operand } => evaluate_unary(self.eval_expr(operand, scope)?, *op),
            ExprKind::Binary {
                op: BinaryOp::And,
                left,
                right,
            } => {
                if !self.eval_expr(left, scope)?.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.eval_expr(right, scope)?.is_truthy()))
            }
            ExprKind::Binary {
                op: BinaryOp::Or,
                left,
                right,
            } => {
                if self.eval_expr(left, scope)?.is_truthy() {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(self.eval_expr(right, scope)?.is_truthy()))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left, scope)?;
                let right = self.eval_expr(right, scope)?;
                evaluate_binary(left, right, *op)
            }

            ExprKind::Index { collection, index } => {
                let container = self.eval_expr(collection, scope)?;
                let key = self.eval_expr(index, scope)?;
                read_index(&container, &key)
            }
            ExprKind::Attribute { object, member } => self.eval_attribute(object, *member, scope),
            ExprKind::Call { func, args } => self.eval_call(*func, args, scope),
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => self.eval_method_call(receiver, *method, args, scope),
        }
    }

    /// Evaluate left to right, preparing each value for storage.
    pub(crate) fn eval_all(
        &mut self,
        exprs: &[Expr],
        scope: &LocalScope<Scope>,
    ) -> Result<Vec<Value>, EvalError> {
        exprs
            .iter()
            .map(|expr| self.eval_expr(expr, scope).map(|value| value.for_binding()))
            .collect()
    }

    fn eval_attribute(
        &mut self,
        object: &Expr,
        member: Name,
        scope: &LocalScope<Scope>,
    ) -> EvalResult {
        let receiver = self.eval_expr(object, scope)?;
        let member_name = self.interner.lookup(member);
        match &receiver {
            Value::Instance(instance) => {
                let owner = || object.display(self.interner).to_string();
                if !self.member_accessible(object, member) {
                    return Err(no_such_member(&owner(), member_name));
                }
                instance
                    .member(member)
                    .ok_or_else(|| no_such_member(&owner(), member_name))
            }
            Value::Class(class) => Err(no_such_member(class.name, member_name)),
            other => Err(no_such_member(other.type_name(), member_name)),
        }
    }
}

fn read_index(container: &Value, key: &Value) -> EvalResult {
    match (container, key) {
        (Value::List(items), Value::Int(position)) => element(&items.borrow(), *position),
        (Value::Tuple(items), Value::Int(position)) => element(items, *position),
        (Value::Str(s), Value::Int(position)) => usize::try_from(*position)
            .ok()
            .and_then(|i| s.chars().nth(i))
            .map(|c| Value::Str(c.to_string()))
            .ok_or_else(|| index_out_of_bounds(*position, s.chars().count())),
        (Value::List(_) | Value::Tuple(_) | Value::Str(_), other) => {
            Err(invalid_index(other.type_name()))
        }
        (Value::Dict(map), key) => {
            let slot = key.dict_key();
            map.borrow()
                .get(&slot)
                .map(|entry| entry.value.clone())
                .ok_or_else(|| key_not_found(&slot))
        }
        (other, _) => Err(cannot_index(other.type_name())),
    }
}

fn element(items: &[Value], position: i64) -> EvalResult {
    usize::try_from(position)
        .ok()
        .and_then(|i| items.get(i))
        .cloned()
        .ok_or_else(|| index_out_of_bounds(position, items.len()))
}
