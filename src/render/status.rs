//! Bleeding edge repository status document.

use std::fmt::Write;

use chrono::{Duration, Utc};

use crate::config::BleedingEdgeConfig;
use crate::mcp::MCP_VERSION;

use super::MCP_TOOL_COUNT;

/// Derive a stable per-repository tool count from the repository name.
///
/// Keeps the `50 + h % 100` shape of the original status page, but with
/// FNV-1a so the figure is deterministic across runs and platforms.
pub fn repo_tool_count(repo: &str) -> u32 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    let mut hash = FNV_OFFSET;
    for byte in repo.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    50 + (hash % 100) as u32
}

/// Compose the bleeding edge repository status document.
pub fn bleeding_edge_status(bleeding: &BleedingEdgeConfig, platform: &str) -> String {
    let now = Utc::now();
    let next_sync = now + Duration::hours(bleeding.update_frequency_hours as i64);

    let mut out = String::new();
    out.push_str("BLEEDING EDGE REPOSITORY STATUS\n\n");
    out.push_str("**CURRENT STATUS:**\n");
    let _ = writeln!(
        out,
        "- **Status**: {}",
        if bleeding.enabled { "ACTIVE" } else { "INACTIVE" }
    );
    let _ = writeln!(
        out,
        "- **Priority Level**: {}",
        bleeding.priority.to_uppercase()
    );
    let _ = writeln!(
        out,
        "- **Last Sync**: {}",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "- **Next Update**: {}", next_sync.format("%H:%M UTC"));
    out.push('\n');

    out.push_str("**BLEEDING EDGE REPOSITORIES:**\n");
    for repo in &bleeding.repositories {
        let _ = writeln!(
            out,
            "**{}**: Active, {} tools available",
            repo,
            repo_tool_count(repo)
        );
    }

    out.push_str(
        "**AI-Powered Security Analysis**: Neural network threat detection\n\
         **Quantum-Resistant Cryptography**: Post-quantum security testing\n\
         **Zero-Day Research Tools**: Latest vulnerability discovery frameworks\n\
         **Advanced Fuzzing**: Machine learning guided input generation\n\
         **Next-Gen Frameworks**: Cutting-edge exploitation platforms\n\
         **IoT Security Arsenal**: Specialized Internet-of-Things testing\n\
         **Cloud-Native Security**: Container and serverless security tools\n\
         **Mobile Security Advanced**: Latest mobile application testing\n\n",
    );

    out.push_str("**REAL-TIME MCP INTEGRATION:**\n");
    let _ = writeln!(out, "- **Protocol**: MCP {} compliant", MCP_VERSION);
    out.push_str("- **Transport**: Server-Sent Events for real-time updates\n");
    let _ = writeln!(
        out,
        "- **Tools**: {} comprehensive cybersecurity functions",
        MCP_TOOL_COUNT
    );
    let _ = writeln!(out, "- **Platform**: {}", platform);
    out.push('\n');

    out.push_str(
        "**ETHICAL USE NOTICE:**\n\
         Bleeding edge tools are designed for authorized security research and testing only.\n\
         All capabilities must be used in compliance with applicable laws and regulations.\n",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_tool_count_stable_and_in_range() {
        let first = repo_tool_count("kali-bleeding-edge");
        let second = repo_tool_count("kali-bleeding-edge");
        assert_eq!(first, second);
        assert!((50..150).contains(&first));

        // Distinct names should not all collapse to one figure
        let other = repo_tool_count("kali-experimental");
        assert!((50..150).contains(&other));
    }

    #[test]
    fn test_status_lists_repositories() {
        let bleeding = BleedingEdgeConfig::default();
        let text = bleeding_edge_status(&bleeding, "Test Platform");

        assert!(!text.is_empty());
        assert!(text.contains("**Status**: ACTIVE"));
        assert!(text.contains("**Priority Level**: HIGH"));
        for repo in &bleeding.repositories {
            assert!(text.contains(repo.as_str()));
        }
        assert!(text.contains("ETHICAL USE NOTICE"));
    }
}
