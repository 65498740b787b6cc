//! Stack growth for deeply nested expressions.
//!
//! The parser and the tree printer recurse once per nesting level. Instead
//! of capping the nesting depth, recursive entry points run inside
//! [`ensure_sufficient_stack`], which moves onto a freshly allocated stack
//! segment whenever less than [`RED_ZONE`] bytes remain.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
