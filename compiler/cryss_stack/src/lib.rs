//! Stack growth for the recursive parts of the front end.
//!
//! The parser descends once per nesting level of brackets, prefix operators
//! and blocks, and type lowering descends once per nested annotation. A
//! pathological input like ten thousand `(` would exhaust a thread's default
//! stack, so those recursion points call [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when less
//! than [`RED_ZONE`] bytes remain. WASM manages its own stack and gets a
//! passthrough.

/// Grow when less than 100KB of stack is left.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
///
/// ```text
/// fn parse_factor(&mut self) -> Result<Option<Expr>, ParseError> {
///     ensure_sufficient_stack(|| self.parse_factor_inner())
/// }
/// ```
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
