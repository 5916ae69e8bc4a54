//! Built-in functions: `print`, `list` and `exit`.
//!
//! Dispatch happens on the called name after the arguments are evaluated.
//! A name that is not a built-in yields `None` so the call falls back to
//! user-defined functions.

use tarn_ir::Name;

use super::Interpreter;
use crate::errors::{
    range_arg_count, range_bound_not_int, wrong_arg_count, EvalError, EvalResult,
};
use crate::value::Value;

impl Interpreter<'_> {
    pub(crate) fn call_builtin(&mut self, func: Name, args: &[Value]) -> Option<EvalResult> {
        match self.interner.lookup(func) {
            "print" => Some(Ok(self.builtin_print(args))),
            "list" => Some(builtin_list(args)),
            "exit" => builtin_exit(args),
            _ => None,
        }
    }

    fn builtin_print(&self, args: &[Value]) -> Value {
        let line = args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.print_handler.println(&line);
        Value::Empty
    }
}

/// `list(n)` is `(0, .., n-1)` and `list(a, b)` is `(a, .., b-1)`.
fn builtin_list(args: &[Value]) -> EvalResult {
    let (start, stop) = range_bounds(args, |i| args[i].to_string())?;
    Ok(Value::tuple((start..stop).map(Value::Int).collect()))
}

/// Terminates the process at once. Only returns on a bad argument.
fn builtin_exit(args: &[Value]) -> Option<EvalResult> {
    let code = match args {
        [] => 0,
        [Value::Int(code)] => match i32::try_from(*code) {
            Ok(code) => code,
            Err(_) => {
                return Some(Err(EvalError::new(format!(
                    "exit code {code} is out of range"
                ))));
            }
        },
        [other] => {
            return Some(Err(EvalError::new(format!(
                "exit code must be int, got {}",
                other.type_name()
            ))));
        }
        _ => return Some(Err(wrong_arg_count("exit", 1, args.len()))),
    };
    tracing::debug!(code, "exit requested");
    std::process::exit(code)
}

/// Validate range arguments and return `(start, stop)`.
///
/// `describe` renders the `i`-th argument for the error message.
pub(crate) fn range_bounds(
    args: &[Value],
    describe: impl Fn(usize) -> String,
) -> Result<(i64, i64), EvalError> {
    let bound = |i: usize| match &args[i] {
        Value::Int(n) => Ok(*n),
        _ => Err(range_bound_not_int(&describe(i))),
    };
    match args.len() {
        1 => Ok((0, bound(0)?)),
        2 => Ok((bound(0)?, bound(1)?)),
        n => Err(range_arg_count(n)),
    }
}
