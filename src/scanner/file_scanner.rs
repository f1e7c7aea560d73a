//! Input path resolution
//!
//! Turns the files and directories a user named into the sorted list of
//! absolute file paths handed to the analysis stages.

use std::fs;
use std::io::{self, Write};
use std::path::{self, Path, PathBuf};
use walkdir::WalkDir;

use super::extension_filter::ExtensionFilter;
use crate::core::{DiscoveryConfig, DiscoveryError, ErrorPolicy, Result};

/// Prefix of every diagnostic line written for a skipped path
pub const WARNING_MARKER: &str = "[!]";

/// Resolve input paths into a sorted list of matching files
///
/// Diagnostics for skipped paths go to stderr.
///
/// # Arguments
/// * `inputs` - Files and directories supplied by the user
/// * `config` - Extension filter and error policy
///
/// # Returns
/// Absolute file paths, deduplicated and sorted byte-wise
pub fn resolve<I>(inputs: I, config: &DiscoveryConfig) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    resolve_with_diagnostics(inputs, config, &mut io::stderr())
}

/// Resolve input paths, writing skip diagnostics to `diagnostics`
///
/// Under [`ErrorPolicy::FailFast`] the first missing, inaccessible or
/// unsupported path aborts the call and nothing is returned.
pub fn resolve_with_diagnostics<I, W>(
    inputs: I,
    config: &DiscoveryConfig,
    diagnostics: &mut W,
) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
    W: Write + ?Sized,
{
    let mut collector = Collector {
        filter: config.filter(),
        policy: config.error_policy,
        diagnostics,
        files: Vec::new(),
    };

    let mut input_count = 0usize;
    for input in inputs {
        input_count += 1;
        collector.visit_input(input.as_ref())?;
    }

    let mut files = collector.files;
    sort_paths(&mut files);
    files.dedup_by(|a, b| a.as_os_str() == b.as_os_str());

    log::debug!(
        "Discovered {} file(s) from {} input(s)",
        files.len(),
        input_count
    );
    Ok(files)
}

/// Sort paths by the bytes of their OS representation
///
/// `Path`'s own ordering compares components, which disagrees with byte
/// order around separators (`a-b/x` vs `a/x`).
pub fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| {
        a.as_os_str()
            .as_encoded_bytes()
            .cmp(b.as_os_str().as_encoded_bytes())
    });
}

/// Accumulation state for one call
struct Collector<'a, W: Write + ?Sized> {
    filter: ExtensionFilter<'a>,
    policy: ErrorPolicy,
    diagnostics: &'a mut W,
    files: Vec<PathBuf>,
}

impl<W: Write + ?Sized> Collector<'_, W> {
    fn visit_input(&mut self, input: &Path) -> Result<()> {
        let path = match path::absolute(input) {
            Ok(path) => path,
            Err(e) => return self.skip(DiscoveryError::from_io(input, e)),
        };
        log::debug!("Resolving input {}", path.display());

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => return self.skip(DiscoveryError::from_io(path, e)),
        };

        if metadata.is_file() {
            self.consider(path);
            Ok(())
        } else if metadata.is_dir() {
            self.walk(&path)
        } else {
            self.skip(DiscoveryError::Unsupported { path })
        }
    }

    /// Depth-first walk; anything that is not a regular file or directory is ignored
    ///
    /// A symlink is judged by its target, as a directly named input would be.
    /// Symlinked directories are not descended.
    fn walk(&mut self, root: &Path) -> Result<()> {
        for entry in WalkDir::new(root).follow_links(false) {
            match entry {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if file_type.is_file() {
                        self.consider(entry.into_path());
                    } else if file_type.is_symlink() {
                        match fs::metadata(entry.path()) {
                            Ok(target) if target.is_file() => self.consider(entry.into_path()),
                            Ok(_) => {}
                            Err(e) => self.skip(DiscoveryError::from_io(entry.into_path(), e))?,
                        }
                    }
                }
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    let source = match e.into_io_error() {
                        Some(source) => source,
                        None => io::Error::other("filesystem loop detected"),
                    };
                    self.skip(DiscoveryError::from_io(path, source))?;
                }
            }
        }
        Ok(())
    }

    fn consider(&mut self, path: PathBuf) {
        if self.filter.matches(&path) {
            self.files.push(path);
        }
    }

    fn skip(&mut self, error: DiscoveryError) -> Result<()> {
        match self.policy {
            ErrorPolicy::FailFast => Err(error),
            ErrorPolicy::SkipAndWarn => {
                log::debug!("Skipping {}", error.path().display());
                if let Err(e) = writeln!(self.diagnostics, "{WARNING_MARKER} {error}") {
                    log::warn!("Could not report skipped path {}: {e}", error.path().display());
                }
                Ok(())
            }
        }
    }
}
