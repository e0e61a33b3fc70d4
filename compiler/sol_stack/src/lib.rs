//! Stack-growth guard for deep recursion.
//!
//! Sol sources are trees of nested lists, and both the reader and the
//! binary emitter recurse once per nesting level. A few thousand
//! unmatched `(`s in a hostile input would overflow the default thread
//! stack long before any other resource limit is hit. Wrapping the
//! recursive entry points in [`ensure_sufficient_stack`] grows the
//! stack on demand instead.
//!
//! # Platform Support
//!
//! - **Native targets**: uses the `stacker` crate to grow the stack.
//! - **WASM targets**: plain passthrough (WASM manages its own stack).

/// Remaining stack below which we grow before recursing (64 KiB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Additional stack allocated per growth step (1 MiB).
#[cfg(not(target_arch = "wasm32"))]
const GROWTH: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
///
/// Call this at each recursion step that is driven by input nesting
/// depth (reading a list element, emitting a child value). The cost on
/// the non-growing path is a single stack-pointer comparison.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM version: call through directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
