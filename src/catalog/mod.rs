//! The arsenal catalog: a read-only registry of tool categories.
//!
//! The catalog is constructed once at startup and shared via `Arc`. There is
//! no mutation after construction; the displayed grand total always equals
//! the sum of category counts plus the configured bleeding edge count.

mod data;

use crate::models::Category;

/// Registry of all arsenal categories
///
/// Lookup is by exact display name, matching the names returned by
/// [`Catalog::names`].
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Create the catalog with all standard categories
    pub fn new() -> Self {
        Self {
            categories: data::standard_categories(),
        }
    }

    /// Get a category by display name
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// All categories, in display order
    pub fn all(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// All category display names, in display order
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Check if a category exists
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum of declared tool counts across all categories
    pub fn standard_total(&self) -> u32 {
        self.categories.iter().map(|c| c.count).sum()
    }

    /// Grand total including the bleeding edge additions
    pub fn total_tools(&self, bleeding_edge_count: u32) -> u32 {
        self.standard_total() + bleeding_edge_count
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BleedingEdgeConfig;

    #[test]
    fn test_catalog_basic() {
        let catalog = Catalog::new();

        assert_eq!(catalog.len(), 13);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_get_category() {
        let catalog = Catalog::new();

        let recon = catalog.get("Information Gathering");
        assert!(recon.is_some());
        assert_eq!(recon.unwrap().name, "Information Gathering");

        let missing = catalog.get("Quantum Divination");
        assert!(missing.is_none());
    }

    #[test]
    fn test_all_categories_registered() {
        let catalog = Catalog::new();

        let expected = [
            "Information Gathering",
            "Vulnerability Analysis",
            "Web Applications",
            "Password Attacks",
            "Wireless Attacks",
            "Exploitation Tools",
            "Forensics",
            "Reverse Engineering",
            "Hardware Hacking",
            "Crypto & Stego",
            "Reporting Tools",
            "Social Engineering",
            "Sniffing & Spoofing",
        ];

        for name in expected {
            assert!(catalog.has(name), "Category '{}' should be registered", name);
        }
        assert_eq!(catalog.names().len(), expected.len());
    }

    #[test]
    fn test_totals_invariant() {
        let catalog = Catalog::new();
        let bleeding = BleedingEdgeConfig::default();

        // The grand total is the sum of category counts plus the bleeding
        // edge count, and with default config that total is exactly 793.
        assert_eq!(catalog.standard_total(), 643);
        assert_eq!(bleeding.additional_tools_count, 150);
        assert_eq!(catalog.total_tools(bleeding.additional_tools_count), 793);
    }

    #[test]
    fn test_counts_cover_tool_samples() {
        let catalog = Catalog::new();

        // The declared count is the catalog figure; the tools list is a
        // representative sample and never exceeds it.
        for category in catalog.all() {
            assert!(!category.tools.is_empty(), "{} has no tools", category.name);
            assert!(
                category.tools.len() as u32 <= category.count,
                "{} lists more tools than its declared count",
                category.name
            );
        }
    }
}
