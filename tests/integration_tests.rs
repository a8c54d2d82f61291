//! Integration tests for the arsenal catalog and MCP tool surface.

use std::sync::Arc;

use serde_json::json;

use kali_arsenal_mcp::config::Config;
use kali_arsenal_mcp::mcp::server::McpServer;
use kali_arsenal_mcp::mcp::ToolRegistry;
use kali_arsenal_mcp::Catalog;

fn registry() -> ToolRegistry {
    ToolRegistry::from_config(Arc::new(Catalog::new()), &Config::default())
}

#[tokio::test]
async fn test_server_initialization() {
    let config = Config::default();
    let server = McpServer::new(Arc::new(Catalog::new()), &config);
    assert!(server.is_ok());
}

#[test]
fn test_catalog_registration() {
    let catalog = Catalog::new();
    let config = Config::default();

    assert_eq!(catalog.len(), 13);
    assert_eq!(catalog.standard_total(), 643);
    assert_eq!(
        catalog.total_tools(config.bleeding_edge.additional_tools_count),
        793
    );
}

#[test]
fn test_tool_registry_exposes_arsenal_tools() {
    let registry = registry();

    let expected = [
        "get_complete_kali_arsenal_info",
        "get_kali_tool_category",
        "run_kali_security_scan",
        "get_bleeding_edge_status",
        "generate_kali_security_report",
    ];

    assert_eq!(registry.len(), expected.len());
    for name in expected {
        let tool = registry.get(name);
        assert!(tool.is_some(), "tool '{}' should be registered", name);
        assert!(!tool.unwrap().description.is_empty());
    }
}

#[tokio::test]
async fn test_arsenal_info_tool_execution() {
    let registry = registry();

    let value = registry
        .execute("get_complete_kali_arsenal_info", json!({}))
        .await
        .expect("tool should succeed");

    let text = value.as_str().expect("result should be text");
    assert!(text.contains("793"));
    assert!(text.contains("Information Gathering"));
    assert!(text.contains("Server-Sent Events"));
}

#[tokio::test]
async fn test_category_tool_execution() {
    let registry = registry();

    let value = registry
        .execute(
            "get_kali_tool_category",
            json!({"category_name": "Exploitation Tools"}),
        )
        .await
        .expect("tool should succeed");
    assert!(value.as_str().unwrap().contains("EXPLOITATION TOOLS"));

    // Unknown names produce the fallback document, not an error
    let value = registry
        .execute(
            "get_kali_tool_category",
            json!({"category_name": "Underwater Basket Weaving"}),
        )
        .await
        .expect("tool should succeed");
    let text = value.as_str().unwrap();
    assert!(text.starts_with("Invalid category."));
    assert!(text.contains("Forensics"));

    // Missing the required argument is an error
    let err = registry
        .execute("get_kali_tool_category", json!({}))
        .await
        .unwrap_err();
    assert!(err.contains("category_name"));
}

#[tokio::test]
async fn test_scan_tool_execution() {
    let registry = registry();

    let value = registry
        .execute(
            "run_kali_security_scan",
            json!({"target": "testhost.local", "scan_type": "comprehensive"}),
        )
        .await
        .expect("tool should succeed");

    let text = value.as_str().unwrap();
    assert!(text.contains("testhost.local"));
    assert!(text.contains("COMPREHENSIVE"));
    assert!(text.contains("793+ security assessments completed"));
}

#[tokio::test]
async fn test_report_tool_execution() {
    let registry = registry();

    // report_type is optional and defaults to comprehensive
    let value = registry
        .execute("generate_kali_security_report", json!({}))
        .await
        .expect("tool should succeed");
    assert!(value
        .as_str()
        .unwrap()
        .contains("**Report Type**: COMPREHENSIVE"));

    let value = registry
        .execute(
            "generate_kali_security_report",
            json!({"report_type": "compliance"}),
        )
        .await
        .expect("tool should succeed");
    assert!(value.as_str().unwrap().contains("COMPLIANCE SCORE"));
}

#[tokio::test]
async fn test_status_tool_execution() {
    let registry = registry();

    let value = registry
        .execute("get_bleeding_edge_status", json!({}))
        .await
        .expect("tool should succeed");

    let text = value.as_str().unwrap();
    assert!(text.contains("BLEEDING EDGE REPOSITORY STATUS"));
    assert!(text.contains("kali-bleeding-edge"));
    assert!(text.contains("kali-experimental"));
    assert!(text.contains("kali-dev"));
}

#[tokio::test]
async fn test_health_endpoint_serves() {
    let catalog = Catalog::new();
    let config = Config::default();

    let (addr, handle) = kali_arsenal_mcp::health::serve(&catalog, &config, "127.0.0.1:0")
        .await
        .expect("health listener should bind");
    assert_ne!(addr.port(), 0);
    handle.abort();
}

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 7860);
    assert_eq!(config.server.health_port, 7861);
    assert!(config.bleeding_edge.enabled);
    assert_eq!(config.bleeding_edge.priority, "high");
    assert_eq!(config.platform, "Unified Web UI + MCP Server");
}
