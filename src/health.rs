//! Platform health endpoint.
//!
//! The health service runs on its own listener, separate from the MCP
//! transport, and reports static platform figures.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::render::MCP_TOOL_COUNT;

/// Payload returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub server: String,
    pub version: String,
    pub platform: String,
    pub total_tools: u32,
    pub mcp_tools: usize,
    pub bleeding_edge: bool,
    pub timestamp: String,
}

/// State shared with the health handler.
#[derive(Debug, Clone)]
struct HealthState {
    platform: String,
    total_tools: u32,
    bleeding_edge: bool,
}

/// Build the health router.
pub fn router(catalog: &Catalog, config: &Config) -> Router {
    let state = Arc::new(HealthState {
        platform: config.platform.clone(),
        total_tools: catalog.total_tools(config.bleeding_edge.additional_tools_count),
        bleeding_edge: config.bleeding_edge.enabled,
    });

    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<HealthState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        server: crate::SERVER_NAME.to_string(),
        version: crate::VERSION.to_string(),
        platform: state.platform.clone(),
        total_tools: state.total_tools,
        mcp_tools: MCP_TOOL_COUNT,
        bleeding_edge: state.bleeding_edge,
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Bind the health listener and serve it on a background task.
pub async fn serve(
    catalog: &Catalog,
    config: &Config,
    addr: &str,
) -> anyhow::Result<(SocketAddr, JoinHandle<()>)> {
    let app = router(catalog, config);

    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Health endpoint listening on http://{}/health", local_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    Ok((local_addr, handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_handler_payload() {
        let catalog = Catalog::new();
        let config = Config::default();
        let state = Arc::new(HealthState {
            platform: config.platform.clone(),
            total_tools: catalog.total_tools(config.bleeding_edge.additional_tools_count),
            bleeding_edge: config.bleeding_edge.enabled,
        });

        let Json(payload) = health_handler(State(state)).await;
        assert_eq!(payload.status, "healthy");
        assert_eq!(payload.server, crate::SERVER_NAME);
        assert_eq!(payload.total_tools, 793);
        assert_eq!(payload.mcp_tools, 5);
        assert!(payload.bleeding_edge);
        assert!(!payload.timestamp.is_empty());
    }

    #[tokio::test]
    async fn test_serve_binds_ephemeral_port() {
        let catalog = Catalog::new();
        let config = Config::default();

        let (addr, handle) = serve(&catalog, &config, "127.0.0.1:0")
            .await
            .expect("bind should succeed");
        assert_ne!(addr.port(), 0);
        handle.abort();
    }
}
