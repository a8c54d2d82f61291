//! Core data models for the arsenal catalog and tool-call parameters.

mod category;
mod scan;

pub use category::{Category, CategoryBuilder};
pub use scan::{ReportKind, ScanType};
