//! Rendering of discovered file lists

pub mod report_writer;

pub use report_writer::{write_report, write_report_file, ReportFormat};
