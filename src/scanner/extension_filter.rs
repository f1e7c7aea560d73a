//! Case-sensitive extension matching
//!
//! The token compared against the filter is the text after the final dot of
//! the file name. A name without any dot is its own token, which is how
//! extension-less artifacts such as `$MFT` are selected.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::path::Path;

/// Extension filter borrowed from a [`DiscoveryConfig`](crate::core::DiscoveryConfig)
#[derive(Debug, Clone, Copy)]
pub enum ExtensionFilter<'a> {
    /// Keep every regular file
    All,
    /// Keep files whose extension token is in the set
    Only(&'a BTreeSet<String>),
}

impl ExtensionFilter<'_> {
    /// Check whether a candidate file should be kept
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::All => true,
            Self::Only(extensions) => extension_token(path)
                .is_some_and(|token| extensions.contains(&*token)),
        }
    }
}

/// Compute the extension token of a path's file name
///
/// Returns `None` only for paths without a file name (e.g. `/` or `..`).
pub fn extension_token(path: &Path) -> Option<Cow<'_, str>> {
    let name = path.file_name()?.to_string_lossy();
    let token = match name {
        Cow::Borrowed(name) => Cow::Borrowed(name.rsplit_once('.').map_or(name, |(_, ext)| ext)),
        Cow::Owned(name) => Cow::Owned(
            name.rsplit_once('.')
                .map_or(name.as_str(), |(_, ext)| ext)
                .to_string(),
        ),
    };
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_token_after_final_dot() {
        assert_eq!(extension_token(Path::new("/a/b/log.evtx")).unwrap(), "evtx");
        assert_eq!(extension_token(Path::new("archive.tar.gz")).unwrap(), "gz");
        assert_eq!(extension_token(Path::new("Security.EVTX")).unwrap(), "EVTX");
    }

    #[test]
    fn test_token_is_whole_name_without_dot() {
        assert_eq!(extension_token(Path::new("/evidence/$MFT")).unwrap(), "$MFT");
        assert_eq!(extension_token(Path::new("README")).unwrap(), "README");
    }

    #[test]
    fn test_token_edge_cases() {
        assert_eq!(extension_token(Path::new(".bashrc")).unwrap(), "bashrc");
        assert_eq!(extension_token(Path::new("trailing.")).unwrap(), "");
        assert!(extension_token(Path::new("/")).is_none());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let extensions = set(&["evtx"]);
        let filter = ExtensionFilter::Only(&extensions);

        assert!(filter.matches(Path::new("file1.evtx")));
        assert!(!filter.matches(Path::new("file2.EVTX")));
        assert!(!filter.matches(Path::new("file3.Evtx")));
    }

    #[test]
    fn test_filter_whole_name_rule_is_explicit() {
        let extensions = set(&["evtx"]);
        let filter = ExtensionFilter::Only(&extensions);
        assert!(!filter.matches(Path::new("$MFT")));

        let extensions = set(&["$MFT", "mft"]);
        let filter = ExtensionFilter::Only(&extensions);
        assert!(filter.matches(Path::new("$MFT")));
        assert!(filter.matches(Path::new("regular.mft")));
        assert!(!filter.matches(Path::new("$mft")));
    }

    #[test]
    fn test_match_all() {
        assert!(ExtensionFilter::All.matches(Path::new("anything")));
        assert!(ExtensionFilter::All.matches(Path::new("x.bin")));
    }
}
