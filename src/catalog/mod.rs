//! Dataset catalog
//!
//! The registry of known dataset endpoint URLs and their optional fast-path
//! entry points, plus the resolver that populates it from a DCAT metadata
//! document.

mod registry;
mod resolver;

pub use registry::Catalog;
pub use resolver::{resolve_metadata, ResolveSummary};
