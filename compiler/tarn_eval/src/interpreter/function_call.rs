//! Function and method calls.
//!
//! A call runs the body in a fresh scope whose parent is the scope the
//! function was defined in, inside a `func` construct. `return v` becomes the
//! call's value and falling off the end yields Empty. Calling a class builds
//! an instance and runs its `init` method with `this` bound to it.

use std::rc::Rc;

use tarn_ir::{Expr, Name};

use super::Interpreter;
use crate::context_stack::ConstructKind;
use crate::environment::{LocalScope, Scope};
use crate::errors::{
    illegal_control_flow, no_such_member, not_callable, undefined_function, wrong_arg_count,
    EvalResult,
};
use crate::exec::{ExecResult, Outcome};
use crate::value::{ClassValue, FunctionValue, Value};

impl Interpreter<'_> {
    pub(crate) fn eval_call(
        &mut self,
        func: Name,
        args: &[Expr],
        scope: &LocalScope<Scope>,
    ) -> EvalResult {
        let arg_values = self.eval_all(args, scope)?;
        if let Some(result) = self.call_builtin(func, &arg_values) {
            return result;
        }
        let callee = scope
            .borrow()
            .lookup(func)
            .ok_or_else(|| undefined_function(self.interner.lookup(func)))?;
        self.call_value(&callee, arg_values)
    }

    /// Call a function or class value with evaluated arguments.
    pub fn call_value(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Function(func) => self.call_function(func, None, args),
            Value::Class(class) => self.instantiate(class, args),
            other => Err(not_callable(other.type_name())),
        }
    }

    pub(crate) fn eval_method_call(
        &mut self,
        receiver: &Expr,
        method: Name,
        args: &[Expr],
        scope: &LocalScope<Scope>,
    ) -> EvalResult {
        let target = self.eval_expr(receiver, scope)?;
        let method_name = self.interner.lookup(method);
        let Value::Instance(instance) = &target else {
            return Err(no_such_member(target.type_name(), method_name));
        };
        let found = if self.member_accessible(receiver, method) {
            instance.class.method(method, method_name)
        } else {
            None
        };
        let Some(func) = found else {
            let owner = receiver.display(self.interner).to_string();
            return Err(no_such_member(&owner, method_name));
        };
        let arg_values = self.eval_all(args, scope)?;
        self.call_function(&func, Some(target.clone()), arg_values)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(function = func.name))]
    fn call_function(
        &mut self,
        func: &FunctionValue,
        this: Option<Value>,
        args: Vec<Value>,
    ) -> EvalResult {
        let params = &func.def.params;
        if params.len() != args.len() {
            return Err(wrong_arg_count(func.name, params.len(), args.len()));
        }

        let frame = Scope::child(&func.captured);
        {
            let mut bindings = frame.borrow_mut();
            if let Some(this) = this {
                bindings.define(self.names.this, this);
            }
            for (&param, arg) in params.iter().zip(&args) {
                if !self.is_discard(param) {
                    bindings.define(param, arg.for_binding());
                }
            }
        }

        let outcome = self.within(ConstructKind::Func, |interp| -> ExecResult {
            interp.exec_local_block(&func.def.body, &frame)
        })?;
        match outcome {
            Outcome::Return(value) => Ok(value),
            other => match other.signal() {
                None => Ok(Value::Empty),
                Some((keyword, required)) => Err(illegal_control_flow(keyword, required.as_str())),
            },
        }
    }

    fn instantiate(&mut self, class: &Rc<ClassValue>, args: Vec<Value>) -> EvalResult {
        let instance = Value::instance(Rc::clone(class));
        match class.method(self.names.init, self.interner.lookup(self.names.init)) {
            Some(init) => {
                self.call_function(&init, Some(instance.clone()), args)?;
            }
            None if args.is_empty() => {}
            None => return Err(wrong_arg_count(class.name, 0, args.len())),
        }
        Ok(instance)
    }
}
