//! Names the executors compare against, interned once per interpreter.

use tarn_ir::{Name, StringInterner};

#[derive(Clone, Copy)]
pub(crate) struct WellKnownNames {
    /// `_`
    pub(crate) discard: Name,
    /// Receiver reference inside methods.
    pub(crate) this: Name,
    /// Range built-in, recognized syntactically by `foreach`.
    pub(crate) list: Name,
    /// Constructor method run when a class is called.
    pub(crate) init: Name,
}

impl WellKnownNames {
    pub(crate) fn new(interner: &StringInterner) -> Self {
        Self {
            discard: interner.intern("_"),
            this: interner.intern("this"),
            list: interner.intern("list"),
            init: interner.intern("init"),
        }
    }
}
