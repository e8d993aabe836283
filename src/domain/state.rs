//! The directory state: single source of truth for every row.
//!
//! Owned by whichever loop drives the UI (interactive or headless). The fetch
//! pipeline never touches it directly; it sends [`DescriptionUpdate`]s that
//! are folded in with [`DirectoryState::apply`].

use super::entry::{Description, ToolEntry};
use super::update::{DescriptionUpdate, FetchOutcome};
use crate::catalog::CatalogItem;

/// Ordered rows of the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryState {
    entries: Vec<ToolEntry>,
}

impl DirectoryState {
    /// Build the initial state from the catalog, every description pending
    pub fn from_catalog(items: &[CatalogItem]) -> Self {
        Self {
            entries: items.iter().map(ToolEntry::from).collect(),
        }
    }

    /// Build a state from explicit rows
    pub fn from_entries(entries: Vec<ToolEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a row by name
    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Fold one pipeline update into the state.
    ///
    /// Matches rows by name. Returns the number of rows changed: zero when the
    /// name is unknown, more than one only if the catalog repeats a name.
    pub fn apply(&mut self, update: &DescriptionUpdate) -> usize {
        let description = match &update.outcome {
            FetchOutcome::Described(text) => Description::Ready(text.clone()),
            FetchOutcome::Failed(_) => Description::Failed,
        };

        let mut changed = 0;
        for entry in self.entries.iter_mut().filter(|e| e.name == update.name) {
            entry.description = description.clone();
            changed += 1;
        }

        if changed == 0 {
            log::warn!("Ignoring update for unknown tool: {}", update.name);
        }
        changed
    }

    /// Number of rows still waiting on the provider
    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_loading()).count()
    }

    /// Number of rows whose fetch failed
    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.description == Description::Failed)
            .count()
    }

    /// Number of rows with a settled description (content or sentinel)
    pub fn settled_count(&self) -> usize {
        self.len() - self.pending_count()
    }

    /// True while any description is unpopulated; gates export
    pub fn is_loading(&self) -> bool {
        self.entries.iter().any(ToolEntry::is_loading)
    }

    /// Format the progress counter shown in the header
    pub fn progress_string(&self) -> String {
        let progress = format!("{}/{} described", self.settled_count(), self.len());
        match self.failed_count() {
            0 => progress,
            failed => format!("{}, {} failed", progress, failed),
        }
    }
}
