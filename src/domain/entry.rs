//! Directory rows and their description lifecycle.

use crate::catalog::CatalogItem;

/// Text shown in place of a description when the provider call failed.
pub const ERROR_SENTINEL: &str = "Error fetching description.";

/// Where a row's description stands.
///
/// Every row starts `Pending` and moves exactly once to `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Description {
    /// Not fetched yet
    #[default]
    Pending,
    /// Provider returned this (trimmed) text
    Ready(String),
    /// Provider call failed; renders as [`ERROR_SENTINEL`]
    Failed,
}

impl Description {
    /// Returns true while the row is still waiting on the provider
    pub fn is_pending(&self) -> bool {
        matches!(self, Description::Pending)
    }

    /// Returns true once the pipeline has produced a value for the row
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// The display/export text: empty while pending, sentinel on failure
    pub fn text(&self) -> &str {
        match self {
            Description::Pending => "",
            Description::Ready(text) => text.as_str(),
            Description::Failed => ERROR_SENTINEL,
        }
    }
}

/// One row of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    /// Unique name; the key fetch results are matched on
    pub name: String,
    pub link: String,
    pub description: Description,
}

impl ToolEntry {
    /// Create a row with a pending description
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            description: Description::Pending,
        }
    }

    /// Create a row with a known description (used by tests and snapshots)
    pub fn with_description(name: impl Into<String>, link: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            description: Description::Ready(text.into()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.description.is_pending()
    }
}

impl From<&CatalogItem> for ToolEntry {
    fn from(item: &CatalogItem) -> Self {
        Self::new(item.name, item.link)
    }
}
