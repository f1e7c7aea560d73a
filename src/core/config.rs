//! Discovery configuration
//!
//! The configuration is an immutable value built once per call: an optional
//! set of extension tokens and the error policy applied to every input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::scanner::extension_filter::ExtensionFilter;

/// How the resolver reacts to a missing, inaccessible or unsupported path
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Abort the whole call on the first offending path
    FailFast,
    /// Write a `[!]` diagnostic, skip the path and keep going
    #[default]
    SkipAndWarn,
}

/// Configuration for a single discovery call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Extension tokens to keep (case-sensitive). `None` keeps every file.
    #[serde(default)]
    pub extensions: Option<BTreeSet<String>>,
    /// Policy for paths that cannot be resolved
    #[serde(default)]
    pub error_policy: ErrorPolicy,
}

impl DiscoveryConfig {
    /// Create a config that matches every file and skips bad inputs with a warning
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict discovery to the given extension tokens
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Set the error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub(crate) fn filter(&self) -> ExtensionFilter<'_> {
        match &self.extensions {
            Some(set) => ExtensionFilter::Only(set),
            None => ExtensionFilter::All,
        }
    }
}
