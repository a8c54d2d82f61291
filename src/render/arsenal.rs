//! Arsenal overview and per-category detail documents.

use std::fmt::Write;

use crate::catalog::Catalog;
use crate::config::BleedingEdgeConfig;
use crate::mcp::MCP_VERSION;
use crate::models::Category;

use super::MCP_TOOL_COUNT;

/// Compose the complete arsenal overview document.
///
/// The grand total line always equals the sum of category counts plus the
/// bleeding edge count.
pub fn arsenal_overview(
    catalog: &Catalog,
    bleeding: &BleedingEdgeConfig,
    platform: &str,
) -> String {
    let standard_tools = catalog.standard_total();
    let bleeding_edge_tools = bleeding.additional_tools_count;
    let total = catalog.total_tools(bleeding_edge_tools);

    let mut out = String::new();
    out.push_str("BLEEDING EDGE KALI LINUX ARSENAL - COMPLETE OVERVIEW\n\n");
    let _ = writeln!(out, "**TOTAL ARSENAL: {} CYBERSECURITY TOOLS**", total);
    let _ = writeln!(out, "- **Standard Kali Tools**: {}", standard_tools);
    let _ = writeln!(out, "- **Bleeding Edge Tools**: {}", bleeding_edge_tools);
    let _ = writeln!(out, "- **Security Categories**: {}", catalog.len());
    let _ = writeln!(out, "- **Platform**: {}", platform);
    out.push('\n');

    out.push_str("**BLEEDING EDGE ENHANCEMENT:**\n");
    let _ = writeln!(
        out,
        "- **Status**: {}",
        if bleeding.enabled { "ACTIVE" } else { "INACTIVE" }
    );
    let _ = writeln!(out, "- **Priority**: {}", bleeding.priority.to_uppercase());
    let _ = writeln!(
        out,
        "- **Repositories**: {}",
        bleeding.repositories.join(", ")
    );
    let _ = writeln!(
        out,
        "- **Auto-Sync**: Every {} hours",
        bleeding.update_frequency_hours
    );
    out.push('\n');

    out.push_str("**CATEGORY BREAKDOWN:**\n");
    for category in catalog.all() {
        let _ = writeln!(
            out,
            "- **{}**: {} tools{}",
            category.name,
            category.count,
            bleeding_suffix(category)
        );
        let _ = writeln!(out, "  *{}*", category.description);
    }

    out.push_str("\nMCP INTEGRATION:\n");
    let _ = writeln!(out, "- **Protocol**: MCP {}", MCP_VERSION);
    out.push_str("- **Transport**: Server-Sent Events (SSE)\n");
    let _ = writeln!(
        out,
        "- **Tools**: {} comprehensive cybersecurity functions",
        MCP_TOOL_COUNT
    );
    out.push_str("- **Real-time**: Live bleeding edge status and updates\n");

    out
}

/// Compose the detail document for one category.
///
/// Unknown or empty names return a defined fallback listing the available
/// category names.
pub fn category_details(catalog: &Catalog, name: &str) -> String {
    let Some(category) = catalog.get(name) else {
        return format!(
            "Invalid category. Available categories: {}",
            catalog.names().join(", ")
        );
    };

    let enhancement = if category.bleeding_edge_enhanced {
        "BLEEDING EDGE ENHANCED"
    } else {
        "STANDARD"
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", category.name.to_uppercase(), enhancement);
    out.push('\n');
    out.push_str("**Category Statistics:**\n");
    let _ = writeln!(out, "- **Tool Count**: {}", category.count);
    let _ = writeln!(out, "- **Description**: {}", category.description);
    let _ = writeln!(
        out,
        "- **Bleeding Edge**: {}",
        if category.bleeding_edge_enhanced {
            "Enhanced"
        } else {
            "Standard"
        }
    );
    out.push('\n');

    out.push_str("**Available Tools:**\n");
    for (i, tool) in category.tools.iter().enumerate() {
        let marker = if Category::is_bleeding_edge_tool(tool) {
            " (bleeding edge)"
        } else {
            ""
        };
        let _ = writeln!(out, "{:2}. {}{}", i + 1, tool, marker);
    }

    out.push_str(
        "\n**Usage in Bleeding Edge Scans:**\n\
         This category is automatically utilized in comprehensive security assessments with\n\
         enhanced bleeding edge tools for maximum coverage and advanced threat detection.\n",
    );

    out
}

fn bleeding_suffix(category: &Category) -> &'static str {
    if category.bleeding_edge_enhanced {
        " (Bleeding Edge Enhanced)"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_contains_grand_total() {
        let catalog = Catalog::new();
        let bleeding = BleedingEdgeConfig::default();

        let text = arsenal_overview(&catalog, &bleeding, "Test Platform");
        assert!(!text.is_empty());
        assert!(text.contains("793"));
        assert!(text.contains("**Standard Kali Tools**: 643"));
        assert!(text.contains("**Bleeding Edge Tools**: 150"));
        assert!(text.contains("Test Platform"));
        assert!(text.contains("Information Gathering"));
        assert!(text.contains("Sniffing & Spoofing"));
    }

    #[test]
    fn test_overview_reflects_disabled_enhancement() {
        let catalog = Catalog::new();
        let bleeding = BleedingEdgeConfig {
            enabled: false,
            ..BleedingEdgeConfig::default()
        };

        let text = arsenal_overview(&catalog, &bleeding, "Test Platform");
        assert!(text.contains("**Status**: INACTIVE"));
    }

    #[test]
    fn test_category_details_known() {
        let catalog = Catalog::new();

        let text = category_details(&catalog, "Password Attacks");
        assert!(text.contains("PASSWORD ATTACKS - BLEEDING EDGE ENHANCED"));
        assert!(text.contains("**Tool Count**: 52"));
        assert!(text.contains("hashcat"));
        assert!(text.contains("(bleeding edge)"));
    }

    #[test]
    fn test_category_details_unknown_fallback() {
        let catalog = Catalog::new();

        for bad in ["", "Quantum Divination"] {
            let text = category_details(&catalog, bad);
            assert!(text.starts_with("Invalid category."));
            // The fallback lists every available category name
            for name in catalog.names() {
                assert!(text.contains(name));
            }
        }
    }
}
