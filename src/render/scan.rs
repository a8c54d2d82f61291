//! Templated security scan transcripts.
//!
//! No scan is performed: the output is a fixed narrative per scan type.

use std::fmt::Write;

use chrono::Utc;

use crate::catalog::Catalog;
use crate::config::BleedingEdgeConfig;
use crate::models::ScanType;

/// Compose the scan transcript for a target.
///
/// An empty target falls back to "example.com".
pub fn scan_results(
    catalog: &Catalog,
    bleeding: &BleedingEdgeConfig,
    platform: &str,
    target: &str,
    scan_type: ScanType,
) -> String {
    let target = if target.trim().is_empty() {
        "example.com"
    } else {
        target
    };

    let mut out = String::new();
    out.push_str("BLEEDING EDGE SECURITY SCAN INITIATED\n\n");
    out.push_str("**Scan Configuration:**\n");
    let _ = writeln!(out, "- **Target**: {}", target);
    let _ = writeln!(out, "- **Scan Type**: {}", scan_type.id().to_uppercase());
    let _ = writeln!(out, "- **Platform**: {}", platform);
    out.push_str("- **Bleeding Edge**: ENHANCED\n");
    let _ = writeln!(
        out,
        "- **Timestamp**: {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    out.push('\n');

    out.push_str("**BLEEDING EDGE TOOLS DEPLOYED:**\n");
    match scan_type {
        ScanType::Reconnaissance => out.push_str(RECONNAISSANCE_PHASE),
        ScanType::Vulnerability => out.push_str(VULNERABILITY_PHASE),
        ScanType::Web => out.push_str(WEB_PHASE),
        ScanType::Wireless => out.push_str(WIRELESS_PHASE),
        ScanType::Comprehensive => push_comprehensive_phase(&mut out, catalog, bleeding),
    }

    out.push_str(
        "\nMCP INTEGRATION:\n\
         Results available via SSE transport for real-time AI analysis\n\
         Compatible with all MCP clients\n",
    );

    out
}

const RECONNAISSANCE_PHASE: &str = "\
**RECONNAISSANCE PHASE:**
rustscan: ultra-fast port scanning (experimental)
nmap: comprehensive service enumeration
feroxbuster: advanced directory discovery
subfinder: subdomain enumeration
httpx-toolkit: HTTP probe and analysis
nuclei: vulnerability template scanning
katana-crawler: web crawling and asset discovery

**RECONNAISSANCE RESULTS:**
- **Open Ports**: 22, 80, 443, 8080
- **Services**: SSH, HTTP, HTTPS, Web Proxy
- **Subdomains**: 15 discovered (bleeding edge enhanced)
- **Technologies**: Web framework detection completed
- **Vulnerabilities**: 3 potential issues identified
";

const VULNERABILITY_PHASE: &str = "\
**VULNERABILITY ANALYSIS:**
nuclei-templates: advanced vulnerability patterns
openvas: comprehensive vulnerability scanning
neural-fuzzing: AI-powered input fuzzing
sqlmap: advanced SQL injection testing
ai-security-toolkit: machine learning threat detection

**VULNERABILITY RESULTS:**
- **Critical**: 0 findings
- **High**: 2 findings (patching recommended)
- **Medium**: 5 findings
- **Low**: 12 findings
- **AI-Enhanced Detection**: 3 advanced patterns identified
";

const WEB_PHASE: &str = "\
**WEB APPLICATION SECURITY:**
cariddi: advanced endpoint discovery
owasp-zap: comprehensive web security scanning
gau: web archive URL gathering
burpsuite: professional web security testing
waybackurls: historical URL analysis

**WEB SECURITY RESULTS:**
- **Endpoints**: 147 discovered
- **Parameters**: 89 tested
- **XSS Potential**: 2 locations
- **CSRF Tokens**: Properly implemented
- **Security Headers**: 3 missing headers identified
";

const WIRELESS_PHASE: &str = "\
**WIRELESS ASSESSMENT:**
aircrack-ng: capture and key recovery suite
wifite: automated access point auditing
reaver: WPS registrar attacks
wifipumpkin3: rogue access point framework
bluetooth-arsenal: short-range protocol probing

**WIRELESS RESULTS:**
- **Access Points**: 8 in range, 6 fingerprinted
- **WPS Enabled**: 2 access points flagged
- **Weak Ciphers**: 1 network on legacy WPA
- **Rogue AP Exposure**: clients probe for 4 open SSIDs
- **Bluetooth Devices**: 11 discoverable
";

fn push_comprehensive_phase(out: &mut String, catalog: &Catalog, bleeding: &BleedingEdgeConfig) {
    let _ = writeln!(
        out,
        "**COMPREHENSIVE BLEEDING EDGE ASSESSMENT:**\n\
         All {} security categories deployed with bleeding edge enhancement:",
        catalog.len()
    );
    for category in catalog.all() {
        let _ = writeln!(
            out,
            "{} ({} tools + bleeding edge)",
            category.name, category.count
        );
    }

    let total = catalog.total_tools(bleeding.additional_tools_count);
    out.push_str("\n**COMPREHENSIVE RESULTS:**\n");
    let _ = writeln!(
        out,
        "- **Total Checks**: {}+ security assessments completed",
        total
    );
    out.push_str(
        "- **Risk Level**: MEDIUM (manageable with recommendations)\n\
         - **Bleeding Edge Findings**: 12 advanced threat patterns\n\
         - **Compliance**: 87% security baseline achievement\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(target: &str, scan_type: ScanType) -> String {
        let catalog = Catalog::new();
        let bleeding = BleedingEdgeConfig::default();
        scan_results(&catalog, &bleeding, "Test Platform", target, scan_type)
    }

    #[test]
    fn test_scan_echoes_target_and_type() {
        let text = render("demo.internal", ScanType::Web);
        assert!(text.contains("**Target**: demo.internal"));
        assert!(text.contains("**Scan Type**: WEB"));
        assert!(text.contains("WEB APPLICATION SECURITY"));
    }

    #[test]
    fn test_scan_empty_target_fallback() {
        let text = render("", ScanType::Reconnaissance);
        assert!(text.contains("**Target**: example.com"));
        assert!(text.contains("RECONNAISSANCE PHASE"));
    }

    #[test]
    fn test_each_scan_type_has_a_phase_section() {
        for (scan_type, marker) in [
            (ScanType::Reconnaissance, "RECONNAISSANCE RESULTS"),
            (ScanType::Vulnerability, "VULNERABILITY RESULTS"),
            (ScanType::Web, "WEB SECURITY RESULTS"),
            (ScanType::Wireless, "WIRELESS RESULTS"),
            (ScanType::Comprehensive, "COMPREHENSIVE RESULTS"),
        ] {
            let text = render("example.com", scan_type);
            assert!(text.contains(marker), "missing {} section", marker);
        }
    }

    #[test]
    fn test_comprehensive_quotes_grand_total() {
        let text = render("example.com", ScanType::Comprehensive);
        assert!(text.contains("793+ security assessments completed"));
        assert!(text.contains("All 13 security categories"));
    }
}
