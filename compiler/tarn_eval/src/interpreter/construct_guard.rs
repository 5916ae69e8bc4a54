//! RAII guard for construct frames.
//!
//! Entering an `if`, a loop or a function call pushes a frame on the
//! interpreter's construct stack. The guard pops it when dropped, so the
//! frame is released on every exit path: normal completion, a control
//! signal, an error returned with `?`, or unwinding.
//!
//! ```text
//! self.within(ConstructKind::For, |interp| {
//!     interp.exec_local_block(body, scope)
//! })
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::context_stack::ConstructKind;

/// Interpreter borrowed for the duration of one construct.
pub struct ConstructGuard<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ConstructGuard<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.constructs.pop();
    }
}

impl<'interp> Deref for ConstructGuard<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ConstructGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push `kind` and return a guard that pops it on drop.
    pub fn enter(&mut self, kind: ConstructKind) -> ConstructGuard<'_, 'a> {
        self.constructs.push(kind);
        ConstructGuard { interpreter: self }
    }

    /// Run `f` inside a `kind` construct.
    pub fn within<T, F>(&mut self, kind: ConstructKind, f: F) -> T
    where
        F: FnOnce(&mut Interpreter<'a>) -> T,
    {
        let mut guard = self.enter(kind);
        f(&mut *guard)
    }
}
