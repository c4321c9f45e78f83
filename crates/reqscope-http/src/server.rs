//! HTTP server harness — bind, serve, graceful stop.
//!
//! Thin wrapper around `axum::serve` so the binary and the tests share the
//! same lifecycle: bind (port 0 for OS-assigned), expose the bound port,
//! stop on demand. The caller passes a router already wrapped with the
//! request-scope middleware; a `/health` route and request logging are added
//! here.

use std::net::SocketAddr;

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (0 for OS-assigned)
    pub port: u16,
    /// Hostname to bind to
    pub hostname: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            hostname: "127.0.0.1".into(),
        }
    }
}

/// A running HTTP server.
pub struct HttpServer {
    /// Shutdown signal
    shutdown_tx: Option<mpsc::Sender<()>>,
    /// Server task handle
    handle: Option<tokio::task::JoinHandle<()>>,
    /// Actual bound port
    port: u16,
}

impl HttpServer {
    /// Binds and serves `router`. Returns once the listener is bound.
    pub async fn start(
        config: ServerConfig,
        router: Router,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);

        let addr: SocketAddr = format!("{}:{}", config.hostname, config.port).parse()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let actual_port = listener.local_addr()?.port();

        info!("listening on http://{}:{}", config.hostname, actual_port);

        let app = router
            .route("/health", get(health_handler))
            .layer(TraceLayer::new_for_http());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.recv().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
            port: actual_port,
        })
    }

    /// The actual bound port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Gracefully stops the server.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(()).await;
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        info!("server stopped");
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
