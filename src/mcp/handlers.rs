//! Tool handlers backed by the static catalog.
//!
//! Each handler renders a document and never fails on bad input: optional
//! enum-like arguments fall back to a default, only missing required
//! arguments are reported as errors.

use std::sync::Arc;

use serde_json::Value;

use crate::catalog::Catalog;
use crate::config::BleedingEdgeConfig;
use crate::models::{ReportKind, ScanType};
use crate::render;

use super::tools::ToolHandler;

/// Shared read-only state for every handler.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub catalog: Arc<Catalog>,
    pub bleeding: BleedingEdgeConfig,
    pub platform: String,
}

impl ToolContext {
    pub fn new(catalog: Arc<Catalog>, bleeding: BleedingEdgeConfig, platform: String) -> Self {
        Self {
            catalog,
            bleeding,
            platform,
        }
    }
}

/// Handler for the complete arsenal overview
#[derive(Debug)]
pub struct ArsenalInfoHandler {
    pub context: ToolContext,
}

#[async_trait::async_trait]
impl ToolHandler for ArsenalInfoHandler {
    async fn execute(&self, _args: Value) -> Result<Value, String> {
        let text = render::arsenal_overview(
            &self.context.catalog,
            &self.context.bleeding,
            &self.context.platform,
        );
        Ok(Value::String(text))
    }
}

/// Handler for per-category details
#[derive(Debug)]
pub struct CategoryDetailsHandler {
    pub context: ToolContext,
}

#[async_trait::async_trait]
impl ToolHandler for CategoryDetailsHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let name = args
            .get("category_name")
            .and_then(|v| v.as_str())
            .ok_or("Missing 'category_name' parameter")?;

        let text = render::category_details(&self.context.catalog, name);
        Ok(Value::String(text))
    }
}

/// Handler for templated security scans
#[derive(Debug)]
pub struct SecurityScanHandler {
    pub context: ToolContext,
}

#[async_trait::async_trait]
impl ToolHandler for SecurityScanHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let target = args
            .get("target")
            .and_then(|v| v.as_str())
            .ok_or("Missing 'target' parameter")?;

        let scan_type = args
            .get("scan_type")
            .and_then(|v| v.as_str())
            .map(ScanType::parse_or_default)
            .unwrap_or_default();

        let text = render::scan_results(
            &self.context.catalog,
            &self.context.bleeding,
            &self.context.platform,
            target,
            scan_type,
        );
        Ok(Value::String(text))
    }
}

/// Handler for the bleeding edge repository status
#[derive(Debug)]
pub struct BleedingEdgeStatusHandler {
    pub context: ToolContext,
}

#[async_trait::async_trait]
impl ToolHandler for BleedingEdgeStatusHandler {
    async fn execute(&self, _args: Value) -> Result<Value, String> {
        let text = render::bleeding_edge_status(&self.context.bleeding, &self.context.platform);
        Ok(Value::String(text))
    }
}

/// Handler for assessment report generation
#[derive(Debug)]
pub struct SecurityReportHandler {
    pub context: ToolContext,
}

#[async_trait::async_trait]
impl ToolHandler for SecurityReportHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let kind = args
            .get("report_type")
            .and_then(|v| v.as_str())
            .map(ReportKind::parse_or_default)
            .unwrap_or_default();

        let text = render::security_report(
            &self.context.catalog,
            &self.context.bleeding,
            &self.context.platform,
            kind,
        );
        Ok(Value::String(text))
    }
}
