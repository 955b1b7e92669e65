//! Member identities and the reflection handles they are derived from.
//!
//! Ids follow the documentation-comment compiler scheme: a one-letter kind,
//! a colon, then the fully qualified name.
//!
//! | Handle          | Id                              |
//! |-----------------|---------------------------------|
//! | type            | `T:Acme.Widgets.Button`         |
//! | property        | `P:Acme.Widgets.Button.Label`   |
//!
//! Comparison is ordinal and case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Kind of member encoded in the id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Type,
    Property,
    /// Any other prefix (`M:`, `F:`, `E:`, `N:`...) found in a documentation file.
    Other,
}

/// Canonical key of a documentable member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    pub fn for_type(ty: &TypeInfo) -> Self {
        Self(format!("T:{}", ty.full_name()))
    }

    /// The property's declaring type supplies the qualified prefix.
    pub fn for_property(property: &PropertyInfo) -> Self {
        Self(format!(
            "P:{}.{}",
            property.declaring_type().full_name(),
            property.name()
        ))
    }

    /// Wrap an id read verbatim from a documentation file.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> MemberKind {
        if self.0.starts_with("T:") {
            MemberKind::Type
        } else if self.0.starts_with("P:") {
            MemberKind::Property
        } else {
            MemberKind::Other
        }
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A loaded component (assembly) as reported by the host's reflection layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    /// On-disk path of the loaded binary. May be blank for in-memory loads.
    pub location: String,
    /// Origin descriptor (usually a `file://` URI) the binary was loaded from.
    pub code_base: Option<String>,
}

impl Assembly {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            code_base: None,
        }
    }

    pub fn with_code_base(mut self, code_base: impl Into<String>) -> Self {
        self.code_base = Some(code_base.into());
        self
    }
}

/// Reflection handle for a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    full_name: String,
    assembly: Arc<Assembly>,
}

impl TypeInfo {
    pub fn new(full_name: impl Into<String>, assembly: Arc<Assembly>) -> Self {
        Self {
            full_name: full_name.into(),
            assembly,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }
}

/// Reflection handle for a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    name: String,
    declaring_type: TypeInfo,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, declaring_type: TypeInfo) -> Self {
        Self {
            name: name.into(),
            declaring_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declaring_type(&self) -> &TypeInfo {
        &self.declaring_type
    }
}

/// Anything that has a documentation id and an owning assembly.
///
/// Implement this for host-specific reflection handles to query a
/// [`crate::DocumentationProvider`] without converting to [`TypeInfo`] or
/// [`PropertyInfo`] first.
pub trait Documentable {
    fn member_id(&self) -> MemberId;

    /// Assembly whose documentation file holds this member's comments.
    fn assembly(&self) -> &Assembly;
}

impl Documentable for TypeInfo {
    fn member_id(&self) -> MemberId {
        MemberId::for_type(self)
    }

    fn assembly(&self) -> &Assembly {
        &self.assembly
    }
}

impl Documentable for PropertyInfo {
    fn member_id(&self) -> MemberId {
        MemberId::for_property(self)
    }

    fn assembly(&self) -> &Assembly {
        self.declaring_type.assembly()
    }
}
