//! Stack growth for deeply nested mixin expansions.
//!
//! Recursive mixins (`.loop(@i) when (@i > 0) { .loop(@i - 1); }`) nest one
//! native call chain per level. `stacker` grows the stack before it runs out.
//!
//! WASM has its own stack management; there the closure runs directly.

/// Run `f`, growing the native stack first if little is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
