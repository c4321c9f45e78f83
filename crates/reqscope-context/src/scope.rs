//! Scoped context store — ambient state for one logical request.
//!
//! Backed by a tokio task-local: the value entered at the boundary is
//! visible to everything the wrapped future runs, including after resumption
//! from an `.await`, and is torn down when the future completes (normally or
//! by panic). Nested entries shadow the outer value for their own extent and
//! restore it on exit. Concurrent tasks never observe each other's value,
//! even when they interleave on the same runtime thread.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

/// Type-erased context value held by the store. The store itself does not
/// care what a context is; callers narrow it back at the point of use.
pub type AmbientContext = Arc<dyn Any + Send + Sync>;

tokio::task_local! {
    static CURRENT: AmbientContext;
}

/// Runs `future` with `context` as the ambient value for its full dynamic
/// extent, and returns whatever the future returns.
pub async fn enter<C, F>(context: Arc<C>, future: F) -> F::Output
where
    C: Any + Send + Sync,
    F: Future,
{
    let context: AmbientContext = context;
    CURRENT.scope(context, future).await
}

/// The ambient context for the caller's extent, or `None` outside any scope.
///
/// Identity-preserving: the returned `Arc` points at the exact object that
/// was entered, never a copy. Never blocks.
pub fn current() -> Option<AmbientContext> {
    CURRENT.try_with(Arc::clone).ok()
}
