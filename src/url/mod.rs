//! URL handling module for Linkmap
//!
//! This module canonicalizes discovered link strings and decides whether a
//! URL belongs to the crawl's starting domain.

mod domain;
mod normalize;

pub use domain::{host_of, is_within_domain};
pub use normalize::normalize_link;
