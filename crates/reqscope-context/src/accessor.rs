//! Typed access to the ambient [`RequestContext`].
//!
//! Narrowing from the store's type-erased value happens here, once. A
//! failure to narrow means the request boundary is miswired — no scope was
//! entered, or a foreign context type was — and is a defect, not a domain
//! error: the panicking accessors fail the request loudly rather than let
//! half-wired code limp along. Domain code that must run under a request
//! uses [`context`] / [`request_id`]; code that can tolerate running outside
//! one uses [`try_context`].

use std::sync::Arc;

use crate::context::RequestContext;
use crate::scope;

/// Context-access failure. Signals a wiring defect at the request boundary;
/// never convert this into a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// No scope is active on the current task.
    #[error("no request context is active; the boundary layer must enter a scope before domain code runs")]
    NotInitialized,
    /// The active scope holds something other than a `RequestContext`.
    #[error("the active context is not a RequestContext; a foreign context type was entered for this extent")]
    TypeMismatch,
}

/// The ambient request context, or the wiring defect preventing access.
pub fn try_context() -> Result<Arc<RequestContext>, ContextError> {
    let ambient = scope::current().ok_or(ContextError::NotInitialized)?;
    ambient
        .downcast::<RequestContext>()
        .map_err(|_| ContextError::TypeMismatch)
}

/// The ambient request context.
///
/// # Panics
///
/// Panics when no request scope is active or when the active context has the
/// wrong type. Both indicate broken boundary wiring and must surface at a
/// top-level boundary, not be caught and recovered from.
pub fn context() -> Arc<RequestContext> {
    match try_context() {
        Ok(ctx) => ctx,
        Err(defect) => panic!("request context unavailable: {defect}"),
    }
}

/// Assigns the current request's correlation id. Called once per request by
/// the boundary layer, before any code that might raise a reportable error.
///
/// # Panics
///
/// Panics outside an active request scope (see [`context`]).
pub fn set_request_id(id: impl Into<String>) {
    context().set_request_id(id);
}

/// The current request's correlation id, `None` when the boundary has not
/// assigned one yet.
///
/// # Panics
///
/// Panics outside an active request scope (see [`context`]).
pub fn request_id() -> Option<String> {
    context().request_id()
}
