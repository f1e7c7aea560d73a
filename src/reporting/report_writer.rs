//! Report writing functionality

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output format for a discovered file list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One absolute path per line
    #[default]
    Text,
    /// Pretty-printed JSON document with a total and the file list
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    files: &'a [PathBuf],
}

/// Write a discovered file list
///
/// # Arguments
/// * `writer` - Destination for the report
/// * `files` - Paths returned by the resolver, already sorted
/// * `format` - Report layout
pub fn write_report<W: Write>(writer: &mut W, files: &[PathBuf], format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for path in files {
                writeln!(writer, "{}", path.display())?;
            }
        }
        ReportFormat::Json => {
            let report = JsonReport {
                total: files.len(),
                files,
            };
            serde_json::to_writer_pretty(&mut *writer, &report)
                .context("Failed to serialize report")?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write a discovered file list to a file, replacing any existing content
pub fn write_report_file(output_path: &Path, files: &[PathBuf], format: ReportFormat) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create report file {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, files, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<PathBuf> {
        vec![
            PathBuf::from("/evidence/a/Security.evtx"),
            PathBuf::from("/evidence/b/$MFT"),
        ]
    }

    #[test]
    fn test_write_text_report() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &sample(), ReportFormat::Text).unwrap();

        let content = String::from_utf8(buffer).unwrap();
        assert_eq!(content, "/evidence/a/Security.evtx\n/evidence/b/$MFT\n");
    }

    #[test]
    fn test_write_json_report() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &sample(), ReportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["files"][1], "/evidence/b/$MFT");
    }

    #[test]
    fn test_write_empty_report() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &[], ReportFormat::Text).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_write_report_file() {
        let temp_file = NamedTempFile::new().unwrap();

        write_report_file(temp_file.path(), &sample(), ReportFormat::Text).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("/evidence/a/Security.evtx"));
    }
}
