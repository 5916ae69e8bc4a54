//! Stack growth for the depth-first statement executor.
//!
//! Statement execution recurses once per nested block, loop body, call and
//! sub-expression. Deeply nested programs (or deep user recursion) would
//! otherwise exhaust the native thread stack before the evaluator reports
//! anything useful, so every recursive entry point in `tarn_eval` runs its
//! body through [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack drops below [`RED_ZONE`]. WASM manages its own stack, so
//! there the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; WASM grows its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining native stack in bytes, when the platform can report it.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// Remaining native stack in bytes; never known on WASM.
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests;
