//! HTTP boundary for request-scoped context.
//!
//! Carries the boundary-layer contract: for every inbound request, build a
//! [`RequestContext`](reqscope_context::RequestContext), enter the scope for
//! the whole handling chain, and assign the correlation id before any domain
//! code runs. Also the single reporting point for domain errors — they are
//! logged once, with their backtrace, and answered as transport-safe JSON
//! records without it.

pub mod middleware;
pub mod response;
pub mod server;

pub use middleware::{REQUEST_ID_HEADER, RequestInfo, ResponseMeta, request_scope};
pub use response::ApiError;
pub use server::{HttpServer, ServerConfig};
