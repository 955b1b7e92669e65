//! Surface XML documentation comments for reflected types and properties.
//!
//! Given a type or property handle, [`DocumentationProvider`] finds the XML
//! file the compiler wrote next to the owning assembly (or in a culture
//! subdirectory), parses it once, and returns the member's summary and
//! remarks. Every failure along the way degrades to "no documentation".
//!
//! ```no_run
//! use std::sync::Arc;
//! use xmldoc_lookup::{Assembly, DocumentationProvider, PropertyInfo, Settings, TypeInfo};
//!
//! let provider = DocumentationProvider::from_settings(&Settings::default());
//! let assembly = Arc::new(Assembly::new("/app/bin/Acme.Widgets.dll"));
//! let button = TypeInfo::new("Acme.Widgets.Button", assembly);
//! let label = PropertyInfo::new("Label", button.clone());
//!
//! if let Some(doc) = provider.describe_property(&label) {
//!     println!("{}", doc.summary.unwrap_or_default());
//! }
//! ```

pub mod config;
pub mod documentation;
pub mod error;
pub mod identity;
pub mod locale;
pub mod location;
pub mod logging;
pub mod paths;

pub use config::{DocumentationConfig, LoggingConfig, Settings};
pub use documentation::{
    DocumentationEntry, DocumentationFile, DocumentationProvider, UsageDescriptor,
};
pub use error::{DocError, DocResult};
pub use identity::{Assembly, Documentable, MemberId, MemberKind, PropertyInfo, TypeInfo};
pub use locale::{Culture, FallbackChain};
pub use location::assembly_location;
pub use paths::find_documentation_file;
