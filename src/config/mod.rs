//! Configuration module for Linkmap
//!
//! The crawler is configured entirely from command-line arguments; this
//! module holds the resulting immutable configuration and its validation.

mod types;
mod validation;

pub use types::CrawlConfig;
pub use validation::validate;
