//! Value types for parsed documentation.

use serde::{Deserialize, Serialize};

/// Comment text written for one `<member>` element.
///
/// Both fields are trimmed. `None` means the element was absent; an element
/// that is present but empty yields `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationEntry {
    pub summary: Option<String>,
    pub remarks: Option<String>,
}

impl DocumentationEntry {
    /// Neither a summary nor a remarks element was written.
    pub fn is_bare(&self) -> bool {
        self.summary.is_none() && self.remarks.is_none()
    }
}

/// Documentation surfaced to tag authors, e.g. as an editor tooltip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl UsageDescriptor {
    pub fn new(summary: Option<String>, remarks: Option<String>) -> Self {
        Self { summary, remarks }
    }
}

impl From<&DocumentationEntry> for UsageDescriptor {
    fn from(entry: &DocumentationEntry) -> Self {
        Self::new(entry.summary.clone(), entry.remarks.clone())
    }
}
