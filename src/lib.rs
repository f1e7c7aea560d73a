//! Artifact Discovery Library
//! 
//! Resolves user-supplied files and directories into a deterministic, sorted
//! list of artifact paths for downstream parsing.

pub mod core;
pub mod scanner;
pub mod reporting;

pub use scanner::file_scanner;
pub use reporting::report_writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::{DiscoveryConfig, DiscoveryError, ErrorPolicy};
    pub use crate::scanner::file_scanner::{resolve, resolve_with_diagnostics, WARNING_MARKER};
    pub use crate::reporting::report_writer::{write_report, write_report_file, ReportFormat};
}
