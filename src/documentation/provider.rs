//! Documentation lookup for reflected members, cached per assembly.

use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::file::DocumentationFile;
use super::types::UsageDescriptor;
use crate::config::{DocumentationConfig, Settings};
use crate::identity::{Documentable, PropertyInfo, TypeInfo};
use crate::location::assembly_location;
use crate::paths::find_documentation_file;
use crate::{debug_event, log_event};

/// Resolves, parses, and caches XML documentation files.
///
/// Construct one per host and share it by reference (or `Arc`). Each assembly
/// location is resolved and parsed at most once for the provider's lifetime;
/// a location without a usable documentation file is remembered as such and
/// never probed again. Cached files are never refreshed.
///
/// A descriptor is returned only when the documentation file has a
/// `<member>` element for the requested id. Its summary and remarks are each
/// optional and may be empty.
#[derive(Debug, Default)]
pub struct DocumentationProvider {
    config: DocumentationConfig,
    cache: DashMap<String, Option<Arc<DocumentationFile>>>,
    files_parsed: AtomicUsize,
}

impl DocumentationProvider {
    pub fn new(config: DocumentationConfig) -> Self {
        Self {
            config,
            cache: DashMap::new(),
            files_parsed: AtomicUsize::new(0),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.documentation.clone())
    }

    pub fn config(&self) -> &DocumentationConfig {
        &self.config
    }

    pub fn describe_type(&self, ty: &TypeInfo) -> Option<UsageDescriptor> {
        self.describe(ty)
    }

    pub fn describe_property(&self, property: &PropertyInfo) -> Option<UsageDescriptor> {
        self.describe(property)
    }

    /// Documentation for any member, or `None` when there is none to show.
    pub fn describe<D: Documentable + ?Sized>(&self, member: &D) -> Option<UsageDescriptor> {
        let id = member.member_id();
        let location = assembly_location(member.assembly())?;
        let file = self.documentation_for(&location)?;

        let entry = file.entry(id.as_str())?;
        Some(UsageDescriptor::from(entry))
    }

    /// Parsed documentation for the assembly at `location`, loading it on
    /// first use.
    pub fn documentation_for(&self, location: &str) -> Option<Arc<DocumentationFile>> {
        if let Some(cached) = self.cache.get(location) {
            debug_event!("provider", "cache hit", "{location}");
            return cached.value().clone();
        }

        // The shard stays locked while loading so concurrent callers for the
        // same location wait for this parse instead of starting their own.
        self.cache
            .entry(location.to_string())
            .or_insert_with(|| self.load(location))
            .value()
            .clone()
    }

    fn load(&self, location: &str) -> Option<Arc<DocumentationFile>> {
        let culture = self.config.culture();
        let Some(path) = find_documentation_file(location, &culture, self.config.max_path_length)
        else {
            debug_event!("provider", "no documentation file", "{location}");
            return None;
        };

        self.files_parsed.fetch_add(1, Ordering::Relaxed);
        match DocumentationFile::load(&path) {
            Ok(file) => {
                log_event!(
                    "provider",
                    "loaded",
                    "{} ({} members)",
                    path.display(),
                    file.len()
                );
                Some(Arc::new(file))
            }
            Err(e) => {
                tracing::warn!(target: "xmldoc", "ignoring documentation for {location}: {e}");
                None
            }
        }
    }

    /// Number of documentation files read so far, including ones that
    /// failed to parse.
    pub fn files_parsed(&self) -> usize {
        self.files_parsed.load(Ordering::Relaxed)
    }

    /// Number of assembly locations with a cached outcome.
    pub fn cached_locations(&self) -> usize {
        self.cache.len()
    }
}
