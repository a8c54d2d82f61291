//! Scan and report parameter enums.
//!
//! Both enums parse leniently: unknown strings fall back to the documented
//! default so every tool call yields a complete document.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Type of simulated security scan
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    /// Port scanning, enumeration and asset discovery
    Reconnaissance,
    /// Vulnerability pattern analysis
    Vulnerability,
    /// Web application security testing
    Web,
    /// Wireless protocol assessment
    Wireless,
    /// All categories deployed
    Comprehensive,
}

impl ScanType {
    /// Identifier used in tool arguments and output
    pub fn id(&self) -> &'static str {
        match self {
            ScanType::Reconnaissance => "reconnaissance",
            ScanType::Vulnerability => "vulnerability",
            ScanType::Web => "web",
            ScanType::Wireless => "wireless",
            ScanType::Comprehensive => "comprehensive",
        }
    }

    /// Parse a scan type, falling back to reconnaissance for unknown input
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "vulnerability" => ScanType::Vulnerability,
            "web" => ScanType::Web,
            "wireless" => ScanType::Wireless,
            "comprehensive" => ScanType::Comprehensive,
            _ => ScanType::Reconnaissance,
        }
    }
}

impl Default for ScanType {
    fn default() -> Self {
        ScanType::Reconnaissance
    }
}

impl std::fmt::Display for ScanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Kind of assessment report to generate
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Full findings with risk breakdown
    Comprehensive,
    /// Executive overview and strategic recommendations
    Executive,
    /// Toolchain deployment and technical findings
    Technical,
    /// Regulatory alignment and audit readiness
    Compliance,
}

impl ReportKind {
    /// Identifier used in tool arguments and output
    pub fn id(&self) -> &'static str {
        match self {
            ReportKind::Comprehensive => "comprehensive",
            ReportKind::Executive => "executive",
            ReportKind::Technical => "technical",
            ReportKind::Compliance => "compliance",
        }
    }

    /// Parse a report kind, falling back to comprehensive for unknown input
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "executive" => ReportKind::Executive,
            "technical" => ReportKind::Technical,
            "compliance" => ReportKind::Compliance,
            _ => ReportKind::Comprehensive,
        }
    }
}

impl Default for ReportKind {
    fn default() -> Self {
        ReportKind::Comprehensive
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
