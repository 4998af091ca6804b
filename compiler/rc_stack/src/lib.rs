//! Stack safety for deeply nested effect expressions.
//!
//! The parser recurses once per grouping and once per right-associative
//! operator, so input such as ten thousand nested parentheses would
//! otherwise overflow the thread stack. Walks over the finished tree
//! recurse just as deeply. Wrap each recursive step in
//! [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn parse_chain(&mut self) -> Result<Expr, ParseError> {
//!     ensure_sufficient_stack(|| {
//!         // ... recursive parsing logic ...
//!     })
//! }
//! ```
//!
//! On native targets the `stacker` crate grows the stack on demand. On
//! WASM the closure is called directly.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
