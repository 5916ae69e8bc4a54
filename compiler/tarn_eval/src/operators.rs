//! Binary and unary operator implementations.
//!
//! The operand type set is fixed, so dispatch is a match on the operand
//! pair. `&&` and `||` short-circuit in the interpreter; reaching them here
//! means both operands were already evaluated.

use tarn_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_unary_op, modulo_by_zero,
    EvalResult,
};
use crate::value::Value;

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation.
#[allow(
    clippy::needless_pass_by_value,
    reason = "callers hand over freshly evaluated operands"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => return Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => return Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        BinaryOp::Eq => return Ok(Value::Bool(values_equal(&left, &right))),
        BinaryOp::NotEq => return Ok(Value::Bool(!values_equal(&left, &right))),
        _ => {}
    }

    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Int(a), Value::Double(b)) => eval_double_binary(int_to_double(*a), *b, op),
        (Value::Double(a), Value::Int(b)) => eval_double_binary(*a, int_to_double(*b), op),
        (Value::Double(a), Value::Double(b)) => eval_double_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Str(s), Value::Int(n)) if op == BinaryOp::Mul => repeat_string(s, *n),
        (Value::List(a), Value::List(b)) if op == BinaryOp::Add => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::list(items))
        }
        (Value::Tuple(a), Value::Tuple(b)) if op == BinaryOp::Add => {
            Ok(Value::tuple(a.iter().chain(b.iter()).cloned().collect()))
        }
        _ => Err(mismatch(op, &left, &right)),
    }
}

fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> crate::errors::EvalError {
    binary_type_mismatch(op.as_symbol(), left.type_name(), right.type_name())
}

#[expect(
    clippy::cast_precision_loss,
    reason = "mixed int/double arithmetic promotes to double"
)]
fn int_to_double(n: i64) -> f64 {
    n as f64
}

/// Equality across all values. Numbers compare numerically across int and
/// double; reference types compare by contents.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Double(b)) | (Value::Double(b), Value::Int(a)) => {
            int_to_double(*a) == *b
        }
        _ => left == right,
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_rem(b), "remainder")
            }
        }
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(mismatch(op, &Value::Int(a), &Value::Int(b))),
    }
}

fn eval_double_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Double(a + b)),
        BinaryOp::Sub => Ok(Value::Double(a - b)),
        BinaryOp::Mul => Ok(Value::Double(a * b)),
        BinaryOp::Div if b == 0.0 => Err(division_by_zero()),
        BinaryOp::Div => Ok(Value::Double(a / b)),
        BinaryOp::Mod if b == 0.0 => Err(modulo_by_zero()),
        BinaryOp::Mod => Ok(Value::Double(a % b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(mismatch(op, &Value::Double(a), &Value::Double(b))),
    }
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Str(format!("{a}{b}"))),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(binary_type_mismatch(op.as_symbol(), "string", "string")),
    }
}

/// Longest string `*` may build, in bytes.
const MAX_REPEAT_LEN: usize = 1 << 30;

fn repeat_string(s: &str, count: i64) -> EvalResult {
    let count = usize::try_from(count)
        .map_err(|_| binary_type_mismatch("*", "string", "negative int"))?;
    match s.len().checked_mul(count) {
        Some(total) if total <= MAX_REPEAT_LEN => Ok(Value::Str(s.repeat(count))),
        _ => Err(integer_overflow("repetition")),
    }
}

/// Evaluate a unary operation.
#[allow(
    clippy::needless_pass_by_value,
    reason = "callers hand over freshly evaluated operands"
)]
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Double(d), UnaryOp::Neg) => Ok(Value::Double(-d)),
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
        _ => Err(invalid_unary_op(op.as_symbol(), value.type_name())),
    }
}
