//! reqscope — demonstration server for request-scoped context and
//! correlated errors.
//!
//! Every inbound request gets a `RequestContext` installed for its full
//! asynchronous extent; errors raised anywhere under a handler capture the
//! request's correlation id and serialize uniformly. The widget routes exist
//! to exercise the taxonomy end to end.
//!
//! Usage:
//!   reqscope                         # Default port 8080
//!   reqscope --port 9090             # Custom port
//!   reqscope --verbose               # Debug logging

use axum::Router;
use axum::extract::Path;
use axum::response::Json;
use axum::routing::get;
use clap::Parser;
use reqscope_context::accessor;
use reqscope_error::{AppError, AppResult};
use reqscope_http::{ApiError, HttpServer, ServerConfig};
use serde_json::{Map, Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reqscope", about = "reqscope demo server — request-scoped context and correlated errors")]
struct Cli {
    /// Port to listen on (0 for OS-assigned)
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Hostname to bind to
    #[arg(long, default_value = "127.0.0.1")]
    hostname: String,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

/// Simulated store lookup, deep in the call graph and behind a suspension
/// point — the error it raises still carries the request's correlation id.
async fn find_widget(id: u64) -> AppResult<Value> {
    tokio::task::yield_now().await;
    match id {
        1 => Ok(json!({ "id": 1, "name": "anvil" })),
        2 => Ok(json!({ "id": 2, "name": "crate" })),
        3 => Ok(json!({ "id": 3, "name": "spring" })),
        _ => {
            let mut metadata = Map::new();
            metadata.insert("widgetId".into(), json!(id));
            Err(AppError::not_found(format!("widget {id} not found")).with_metadata(metadata))
        }
    }
}

async fn get_widget(Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id: u64 = id.parse().map_err(|e: std::num::ParseIntError| {
        ApiError(
            AppError::argument_invalid(format!("widget id must be numeric, got {id:?}")).with_cause(e),
        )
    })?;
    if id == 0 {
        return Err(AppError::argument_out_of_range("widget ids start at 1").into());
    }
    let widget = find_widget(id).await?;
    Ok(Json(widget))
}

async fn whoami() -> Json<Value> {
    Json(json!({ "correlationId": accessor::request_id() }))
}

pub fn router() -> Router {
    Router::new()
        .route("/widgets/{id}", get(get_widget))
        .route("/whoami", get(whoami))
        .layer(axum::middleware::from_fn(reqscope_http::request_scope))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig {
        port: cli.port,
        hostname: cli.hostname.clone(),
    };
    let mut server = HttpServer::start(config, router())
        .await
        .map_err(|e| anyhow::anyhow!("failed to start server: {e}"))?;

    println!("reqscope listening on http://{}:{}", cli.hostname, server.port());
    println!("Press Ctrl+C to stop.");

    tokio::signal::ctrl_c().await?;

    info!("shutdown signal received");
    server.stop().await;
    Ok(())
}
