//! Request-scoped ambient context.
//!
//! A context object entered at the request boundary becomes visible to every
//! call — synchronous or asynchronous — made within that request's dynamic
//! extent, without being threaded through as a parameter. This crate is the
//! single source of truth for that mechanism:
//! - [`scope`] — the store itself, backed by task-local state
//! - [`context`] — the per-request [`RequestContext`] object
//! - [`accessor`] — typed lookup of the ambient context, with loud failure
//!   when the boundary wiring is missing

pub mod accessor;
pub mod context;
pub mod scope;

pub use accessor::{ContextError, context, request_id, set_request_id, try_context};
pub use context::RequestContext;
