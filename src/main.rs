use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

// Import from our modularized library
use artifact_discovery::prelude::*;

#[derive(Parser)]
#[command(name = "artifact_discovery")]
#[command(version, about = "Resolve files and directories into a sorted list of artifacts", long_about = None)]
struct Cli {
    /// Files or directories to search
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Only keep files with this extension (repeatable, case-sensitive).
    /// A name without a dot, such as $MFT, is its own extension.
    #[arg(short, long = "extension", value_name = "EXT")]
    extensions: Vec<String>,

    /// What to do with paths that are missing or unreadable
    #[arg(long, value_enum, default_value_t = ErrorPolicy::SkipAndWarn)]
    error_policy: ErrorPolicy,

    /// Shorthand for --error-policy fail-fast
    #[arg(long, conflicts_with = "error_policy")]
    fail_fast: bool,

    /// Write the file list here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit a JSON report instead of one path per line
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_module("artifact_discovery", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let mut config = DiscoveryConfig::new().with_error_policy(if cli.fail_fast {
        ErrorPolicy::FailFast
    } else {
        cli.error_policy
    });
    if !cli.extensions.is_empty() {
        config = config.with_extensions(cli.extensions);
    }
    log::debug!("Discovery config: {config:?}");

    let files = resolve(&cli.paths, &config).context("Failed to resolve input paths")?;

    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    match cli.output {
        Some(ref output) => {
            write_report_file(output, &files, format)?;
            log::info!("Wrote {} path(s) to {}", files.len(), output.display());
        }
        None => write_report(&mut io::stdout().lock(), &files, format)?,
    }

    Ok(())
}
