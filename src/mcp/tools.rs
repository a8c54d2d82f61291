//! Tool registry for MCP tools.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::catalog::Catalog;
use crate::config::Config;

use super::handlers::{
    ArsenalInfoHandler, BleedingEdgeStatusHandler, CategoryDetailsHandler, SecurityReportHandler,
    SecurityScanHandler, ToolContext,
};

/// An MCP tool that can be called by the client
#[derive(Clone)]
pub struct Tool {
    /// Tool name (e.g., "run_kali_security_scan")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    pub input_schema: serde_json::Value,

    /// Handler function to execute the tool
    pub handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish()
    }
}

/// Handler for executing a tool
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync + std::fmt::Debug {
    /// Execute the tool with the given arguments
    async fn execute(&self, args: Value) -> Result<Value, String>;
}

/// Registry for all MCP tools
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    /// Create a new tool registry with all arsenal tools registered
    pub fn from_config(catalog: Arc<Catalog>, config: &Config) -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
        };

        let context = ToolContext::new(
            catalog,
            config.bleeding_edge.clone(),
            config.platform.clone(),
        );
        registry.register_arsenal_tools(&context);

        registry
    }

    fn register_arsenal_tools(&mut self, context: &ToolContext) {
        let total = context
            .catalog
            .total_tools(context.bleeding.additional_tools_count);

        // 1. get_complete_kali_arsenal_info - full arsenal overview
        self.register(Tool {
            name: "get_complete_kali_arsenal_info".to_string(),
            description: format!(
                "Get the complete overview of all {} cybersecurity tools with bleeding edge enhancement",
                total
            ),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
            handler: Arc::new(ArsenalInfoHandler {
                context: context.clone(),
            }),
        });

        // 2. get_kali_tool_category - per-category details
        self.register(Tool {
            name: "get_kali_tool_category".to_string(),
            description: "Get detailed information about a specific security tool category, including its tool listing.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "category_name": {
                        "type": "string",
                        "description": "Category name (e.g., 'Information Gathering', 'Web Applications')"
                    }
                },
                "required": ["category_name"]
            }),
            handler: Arc::new(CategoryDetailsHandler {
                context: context.clone(),
            }),
        });

        // 3. run_kali_security_scan - templated scan transcript
        self.register(Tool {
            name: "run_kali_security_scan".to_string(),
            description: "Run a simulated security scan against a target and return the assessment transcript.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "target": {
                        "type": "string",
                        "description": "Scan target (hostname, IP or URL)"
                    },
                    "scan_type": {
                        "type": "string",
                        "description": "Type of scan to simulate",
                        "enum": ["reconnaissance", "vulnerability", "web", "wireless", "comprehensive"],
                        "default": "reconnaissance"
                    }
                },
                "required": ["target"]
            }),
            handler: Arc::new(SecurityScanHandler {
                context: context.clone(),
            }),
        });

        // 4. get_bleeding_edge_status - repository status
        self.register(Tool {
            name: "get_bleeding_edge_status".to_string(),
            description: "Get the current status of the bleeding edge repositories and experimental capabilities.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
            handler: Arc::new(BleedingEdgeStatusHandler {
                context: context.clone(),
            }),
        });

        // 5. generate_kali_security_report - assessment report
        self.register(Tool {
            name: "generate_kali_security_report".to_string(),
            description: "Generate a security assessment report in the requested format.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "report_type": {
                        "type": "string",
                        "description": "Report format to generate",
                        "enum": ["comprehensive", "executive", "technical", "compliance"],
                        "default": "comprehensive"
                    }
                }
            }),
            handler: Arc::new(SecurityReportHandler {
                context: context.clone(),
            }),
        });
    }

    /// Register a tool
    pub fn register(&mut self, tool: Tool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Get all tools
    pub fn all(&self) -> Vec<&Tool> {
        self.tools.values().collect()
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name
    pub async fn execute(&self, name: &str, args: Value) -> Result<Value, String> {
        let tool = self
            .get(name)
            .ok_or_else(|| format!("Tool '{}' not found", name))?;

        tool.handler.execute(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> ToolRegistry {
        let config = Config::default();
        ToolRegistry::from_config(Arc::new(Catalog::new()), &config)
    }

    #[test]
    fn test_registry_has_exactly_the_arsenal_tools() {
        let registry = registry();
        assert_eq!(registry.len(), crate::render::MCP_TOOL_COUNT);

        for name in [
            "get_complete_kali_arsenal_info",
            "get_kali_tool_category",
            "run_kali_security_scan",
            "get_bleeding_edge_status",
            "generate_kali_security_report",
        ] {
            assert!(registry.get(name).is_some(), "missing tool {}", name);
        }
    }

    #[test]
    fn test_schemas_declare_required_parameters() {
        let registry = registry();

        let category = registry.get("get_kali_tool_category").unwrap();
        assert_eq!(
            category.input_schema["required"],
            json!(["category_name"])
        );

        let scan = registry.get("run_kali_security_scan").unwrap();
        assert_eq!(scan.input_schema["required"], json!(["target"]));

        let info = registry.get("get_complete_kali_arsenal_info").unwrap();
        assert!(info.input_schema.get("required").is_none());
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let registry = registry();
        let err = registry.execute("no_such_tool", json!({})).await.unwrap_err();
        assert!(err.contains("not found"));
    }

    #[tokio::test]
    async fn test_execute_by_name() {
        let registry = registry();
        let value = registry
            .execute("get_bleeding_edge_status", json!({}))
            .await
            .unwrap();
        assert!(value.as_str().unwrap().contains("REPOSITORY STATUS"));
    }
}
