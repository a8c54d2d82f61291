//! Canned document composition.
//!
//! Every function in this module is a pure string constructor over the
//! read-only catalog and configuration. Nothing here performs network I/O,
//! spawns processes or touches the filesystem; "scan results" and "reports"
//! are templated text.

mod arsenal;
mod report;
mod scan;
mod status;

pub use arsenal::{arsenal_overview, category_details};
pub use report::security_report;
pub use scan::scan_results;
pub use status::{bleeding_edge_status, repo_tool_count};

/// Number of MCP tools exposed by the server, quoted in several documents.
pub const MCP_TOOL_COUNT: usize = 5;
