//! Request context — the per-request object installed by the boundary layer.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Context for a single logical request.
///
/// `request` and `response` are opaque transport representations, fixed at
/// creation — the context never swaps them out, though their referents may
/// carry interior mutability for collaborators to fill in. The request id
/// starts unset and is assigned exactly once by the boundary layer
/// (middleware) before any domain code runs.
pub struct RequestContext {
    request: Arc<dyn Any + Send + Sync>,
    response: Arc<dyn Any + Send + Sync>,
    request_id: RwLock<Option<String>>,
}

impl RequestContext {
    pub fn new(
        request: Arc<dyn Any + Send + Sync>,
        response: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        Self {
            request,
            response,
            request_id: RwLock::new(None),
        }
    }

    /// The inbound representation, narrowed to its concrete type.
    /// `None` when the boundary stored a different type.
    pub fn request<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.request).downcast::<T>().ok()
    }

    /// The outbound representation, narrowed to its concrete type.
    pub fn response<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.response).downcast::<T>().ok()
    }

    /// Correlation id for this request, `None` until the boundary assigns it.
    pub fn request_id(&self) -> Option<String> {
        self.request_id.read().clone()
    }

    /// Assigns the request id. Boundary-layer use; once per request.
    pub fn set_request_id(&self, id: impl Into<String>) {
        *self.request_id.write() = Some(id.into());
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("request_id", &*self.request_id.read())
            .finish_non_exhaustive()
    }
}
