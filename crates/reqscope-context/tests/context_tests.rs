//! Context layer tests — scope entry/exit, identity across suspension,
//! isolation between interleaved requests, and accessor failure modes.

use std::sync::Arc;

use reqscope_context::{ContextError, RequestContext, accessor, scope};

fn new_context() -> Arc<RequestContext> {
    Arc::new(RequestContext::new(Arc::new(()), Arc::new(())))
}

// ─────────────────────────────────────────────────────────────────────
// Scope store
// ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn current_is_none_outside_any_scope() {
    assert!(scope::current().is_none());
}

#[tokio::test]
async fn identity_preserved_across_suspension() {
    let ctx = new_context();

    let entered = Arc::clone(&ctx);
    scope::enter(entered, async {
        let before = accessor::context();
        assert!(Arc::ptr_eq(&before, &ctx));

        // Simulated suspension — other tasks may run here.
        tokio::task::yield_now().await;

        let after = accessor::context();
        assert!(Arc::ptr_eq(&after, &ctx));

        // And from a nested async call.
        let nested = deep_lookup().await;
        assert!(Arc::ptr_eq(&nested, &ctx));
    })
    .await;

    assert!(scope::current().is_none());
}

async fn deep_lookup() -> Arc<RequestContext> {
    tokio::task::yield_now().await;
    accessor::context()
}

#[tokio::test]
async fn nested_scopes_shadow_and_restore() {
    let outer = new_context();
    outer.set_request_id("outer");
    let inner = new_context();
    inner.set_request_id("inner");

    scope::enter(Arc::clone(&outer), async {
        assert_eq!(accessor::request_id().as_deref(), Some("outer"));

        scope::enter(Arc::clone(&inner), async {
            assert_eq!(accessor::request_id().as_deref(), Some("inner"));
        })
        .await;

        // Outer context restored after the nested extent ends.
        assert_eq!(accessor::request_id().as_deref(), Some("outer"));
    })
    .await;
}

#[tokio::test]
async fn interleaved_requests_are_isolated() {
    // Two logical requests interleaving on the same thread: each must only
    // ever observe its own context, across many suspension points.
    let run = |id: &'static str| async move {
        let ctx = new_context();
        ctx.set_request_id(id);
        scope::enter(ctx, async move {
            for _ in 0..10 {
                assert_eq!(accessor::request_id().as_deref(), Some(id));
                tokio::task::yield_now().await;
            }
        })
        .await;
    };

    tokio::join!(run("r-1"), run("r-2"));
}

#[tokio::test]
async fn spawned_sibling_requests_are_isolated() {
    let spawn_request = |id: &'static str| {
        tokio::spawn(async move {
            let ctx = new_context();
            ctx.set_request_id(id);
            scope::enter(ctx, async move {
                tokio::task::yield_now().await;
                accessor::request_id()
            })
            .await
        })
    };

    let a = spawn_request("task-a");
    let b = spawn_request("task-b");

    assert_eq!(a.await.unwrap().as_deref(), Some("task-a"));
    assert_eq!(b.await.unwrap().as_deref(), Some("task-b"));
}

#[tokio::test]
async fn sequential_requests_do_not_leak_state() {
    let first = new_context();
    scope::enter(Arc::clone(&first), async {
        accessor::set_request_id("first");
        assert_eq!(accessor::request_id().as_deref(), Some("first"));
    })
    .await;

    // A fresh context starts unassigned even though the first request set an
    // id on the same store.
    let second = new_context();
    scope::enter(second, async {
        assert_eq!(accessor::request_id(), None);
        accessor::set_request_id("second");
        assert_eq!(accessor::request_id().as_deref(), Some("second"));
    })
    .await;

    assert_eq!(first.request_id().as_deref(), Some("first"));
}

// ─────────────────────────────────────────────────────────────────────
// Accessor failure modes
// ─────────────────────────────────────────────────────────────────────

#[test]
fn try_context_outside_scope_is_not_initialized() {
    assert_eq!(
        accessor::try_context().unwrap_err(),
        ContextError::NotInitialized
    );
}

#[tokio::test]
async fn try_context_with_foreign_type_is_type_mismatch() {
    scope::enter(Arc::new("not a request context".to_string()), async {
        assert_eq!(
            accessor::try_context().unwrap_err(),
            ContextError::TypeMismatch
        );
    })
    .await;
}

#[test]
#[should_panic(expected = "request context unavailable")]
fn context_outside_scope_panics() {
    let _ = accessor::context();
}

#[test]
#[should_panic(expected = "request context unavailable")]
fn set_request_id_outside_scope_panics() {
    accessor::set_request_id("r-1");
}

// ─────────────────────────────────────────────────────────────────────
// Request context object
// ─────────────────────────────────────────────────────────────────────

#[test]
fn request_and_response_narrow_to_their_concrete_types() {
    let req = Arc::new("GET /widgets/1".to_string());
    let res = Arc::new(42_u32);
    let ctx = RequestContext::new(req.clone(), res.clone());

    let narrowed = ctx.request::<String>().unwrap();
    assert!(Arc::ptr_eq(&narrowed, &req));
    assert_eq!(*ctx.response::<u32>().unwrap(), 42);

    // Wrong type narrows to None rather than panicking.
    assert!(ctx.request::<u32>().is_none());
    assert!(ctx.response::<String>().is_none());
}

#[test]
fn request_id_is_unset_until_assigned() {
    let ctx = new_context();
    assert_eq!(ctx.request_id(), None);
    ctx.set_request_id("abc");
    assert_eq!(ctx.request_id().as_deref(), Some("abc"));
}
