//! Stack growth for recursive descent.
//!
//! Both parsers recurse once per nesting level, so a fixture such as
//! `((((((1))))))` or `[[[[[]]]]]` costs one native frame chain per
//! bracket. [`with_stack`] grows the stack on demand so pathological
//! nesting surfaces as a parse result instead of a crash.
//!
//! On `wasm32` the guard is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining headroom is below
/// the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
