//! Input file discovery

pub mod extension_filter;
pub mod file_scanner;

pub use extension_filter::{extension_token, ExtensionFilter};
pub use file_scanner::{resolve, resolve_with_diagnostics, sort_paths, WARNING_MARKER};
