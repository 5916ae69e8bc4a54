//! Lexical scopes for variable bindings.
//!
//! A scope maps names to values and may point at an enclosing scope. Reads
//! walk outward. Writes update the nearest existing binding and otherwise
//! create the binding in the scope they were issued against, so a loop body
//! that assigns to an outer variable mutates that variable rather than
//! shadowing it.
//!
//! Scopes are shared handles: a function value keeps the scope it was
//! defined in, and an instance keeps its member scope, both through
//! [`LocalScope`].

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use tarn_ir::Name;

use crate::value::Value;

/// A single-threaded shared handle with interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. `#[repr(transparent)]`
/// keeps the layout identical to `Rc<RefCell<T>>`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Fresh top-level scope behind a shared handle.
    pub fn global() -> LocalScope<Scope> {
        LocalScope::new(Scope::new())
    }

    /// Fresh scope enclosed by `parent`.
    pub fn child(parent: &LocalScope<Scope>) -> LocalScope<Scope> {
        LocalScope::new(Scope::with_parent(parent.clone()))
    }

    pub fn parent(&self) -> Option<&LocalScope<Scope>> {
        self.parent.as_ref()
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a name, walking outward through enclosing scopes.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Look up a name in this scope only.
    pub fn lookup_local(&self, name: Name) -> Option<Value> {
        self.bindings.get(&name).cloned()
    }

    pub fn contains_local(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Whether `name` is bound here or in any enclosing scope.
    pub fn is_bound(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
            || self
                .parent
                .as_ref()
                .is_some_and(|parent| parent.borrow().is_bound(name))
    }

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Hands the value back when no scope in the chain binds the name.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), Value> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(value),
        }
    }

    /// Write `name`: update the nearest binding, else define it here.
    pub fn set(&mut self, name: Name, value: Value) {
        if let Err(value) = self.assign(name, value) {
            self.define(name, value);
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values can point back at this scope through closures, so only
        // the shape is printed.
        f.debug_struct("Scope")
            .field("bindings", &self.bindings.len())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
