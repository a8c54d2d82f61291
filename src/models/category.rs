//! Category model representing one section of the arsenal catalog.

use serde::{Deserialize, Serialize};

/// One category of the arsenal catalog
///
/// The `count` field is the catalog-declared number of tools in the
/// category; `tools` is a representative sample and may list fewer entries
/// than `count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Display name, e.g. "Information Gathering"
    pub name: String,

    /// Declared tool count for this category
    pub count: u32,

    /// One-line description
    pub description: String,

    /// Whether this category carries bleeding edge additions
    pub bleeding_edge_enhanced: bool,

    /// Representative tool names
    pub tools: Vec<String>,
}

impl Category {
    /// Create a new category with required fields and no tool list
    pub fn new(name: impl Into<String>, count: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count,
            description: description.into(),
            bleeding_edge_enhanced: false,
            tools: Vec::new(),
        }
    }

    /// Whether a tool name looks like a bleeding edge addition
    pub fn is_bleeding_edge_tool(tool: &str) -> bool {
        ["-ng", "toolkit", "arsenal"]
            .iter()
            .any(|marker| tool.contains(marker))
    }
}

/// Builder for constructing Category entries
#[derive(Debug, Clone)]
pub struct CategoryBuilder {
    category: Category,
}

impl CategoryBuilder {
    /// Create a new builder with required fields
    pub fn new(name: impl Into<String>, count: u32, description: impl Into<String>) -> Self {
        Self {
            category: Category::new(name, count, description),
        }
    }

    /// Mark the category as bleeding edge enhanced
    pub fn bleeding_edge(mut self) -> Self {
        self.category.bleeding_edge_enhanced = true;
        self
    }

    /// Set the representative tool list
    pub fn tools(mut self, tools: &[&str]) -> Self {
        self.category.tools = tools.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Build the Category
    pub fn build(self) -> Category {
        self.category
    }
}
