//! Stack safety for deep recursion.
//!
//! The expression parser, the expression evaluator and the block executor
//! all recurse once per nesting level. A program such as `prit(((((...1)))));`
//! or a few thousand nested `fi` blocks would otherwise overflow the native
//! stack, so each recursive entry point is wrapped in
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call; the runtime manages its own stack.

/// Grow the stack when less than this much (100KB) remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the
/// red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
