//! Compiler-generated XML documentation: parsing, lookup, and caching.
//!
//! This module provides:
//! - A streaming parser for documentation XML files
//! - [`DocumentationFile`], an id-indexed view of one file
//! - [`DocumentationProvider`], which maps reflected members to their file and
//!   caches the result per assembly

pub mod file;
mod parser;
pub mod provider;
pub mod types;

pub use file::DocumentationFile;
pub use provider::DocumentationProvider;
pub use types::{DocumentationEntry, UsageDescriptor};
