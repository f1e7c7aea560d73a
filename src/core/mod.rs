//! Configuration and error types shared by the resolver

pub mod config;
pub mod error;

pub use config::{DiscoveryConfig, ErrorPolicy};
pub use error::{DiscoveryError, Result};
