//! An XML documentation file loaded into memory.

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::parser::parse_document;
use super::types::DocumentationEntry;
use crate::error::{DocError, DocResult};

/// Parsed documentation file, indexed by member id.
///
/// Lookups are exact, case-sensitive string matches against the `name`
/// attribute of each `<member>` element.
#[derive(Debug, Clone)]
pub struct DocumentationFile {
    path: PathBuf,
    assembly_name: Option<String>,
    entries: IndexMap<String, DocumentationEntry>,
}

impl DocumentationFile {
    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse documentation XML that was read from `path`.
    pub fn parse(xml: &str, path: impl Into<PathBuf>) -> DocResult<Self> {
        let path = path.into();
        let parsed = parse_document(xml, &path)?;
        Ok(Self {
            path,
            assembly_name: parsed.assembly_name,
            entries: parsed.entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value of `<assembly><name>`, if the compiler wrote one.
    pub fn assembly_name(&self) -> Option<&str> {
        self.assembly_name.as_deref()
    }

    /// A `<member>` element with this id exists, even if it has no text.
    pub fn has_entry(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn entry(&self, id: &str) -> Option<&DocumentationEntry> {
        self.entries.get(id)
    }

    pub fn summary(&self, id: &str) -> Option<&str> {
        self.entry(id)?.summary.as_deref()
    }

    pub fn remarks(&self, id: &str) -> Option<&str> {
        self.entry(id)?.remarks.as_deref()
    }

    /// Member ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
