//! Request-scope middleware — installs the ambient context per request.
//!
//! For every inbound request: build the [`RequestContext`] from the request
//! line, enter the scope around the rest of the stack, assign the
//! correlation id — adopted from an inbound `X-Request-Id` header or freshly
//! generated — before any handler runs, and echo the id on the response so
//! clients can quote it back.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::Response;
use parking_lot::Mutex;
use reqscope_context::{RequestContext, accessor, scope};
use tracing::debug;

/// Header carrying the correlation id, inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Opaque inbound representation stored on the context: the request line,
/// without headers or body.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub method: Method,
    pub uri: Uri,
}

/// Outbound slot stored on the context; the middleware fills in the final
/// status once the handler chain produces a response.
#[derive(Debug, Default)]
pub struct ResponseMeta {
    status: Mutex<Option<StatusCode>>,
}

impl ResponseMeta {
    pub fn status(&self) -> Option<StatusCode> {
        *self.status.lock()
    }

    fn set_status(&self, status: StatusCode) {
        *self.status.lock() = Some(status);
    }
}

/// Entry point for `axum::middleware::from_fn`.
pub async fn request_scope(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let info = Arc::new(RequestInfo {
        method: request.method().clone(),
        uri: request.uri().clone(),
    });
    let meta = Arc::new(ResponseMeta::default());
    let context = Arc::new(RequestContext::new(info, meta.clone()));

    debug!(%request_id, method = %request.method(), uri = %request.uri(), "request scope entered");

    let echo_id = request_id.clone();
    let mut response = scope::enter(context, async move {
        // Must happen before any code that might raise a reportable error.
        accessor::set_request_id(request_id);
        next.run(request).await
    })
    .await;

    meta.set_status(response.status());

    if let Ok(value) = HeaderValue::from_str(&echo_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}
