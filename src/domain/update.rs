//! Messages the fetch pipeline publishes, one per completed tool.

/// What the provider produced for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Trimmed, non-empty description text
    Described(String),
    /// Provider call failed; the reason is for logs only
    Failed(String),
}

/// A single incremental update to the directory state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionUpdate {
    /// Tool name the update is keyed on
    pub name: String,
    pub outcome: FetchOutcome,
}

impl DescriptionUpdate {
    /// Successful fetch
    pub fn described(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: FetchOutcome::Described(text.into()),
        }
    }

    /// Failed fetch
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: FetchOutcome::Failed(reason.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_constructors() {
        let ok = DescriptionUpdate::described("Vapi", "Voice agents.");
        assert_eq!(ok.name, "Vapi");
        assert!(!ok.is_failure());

        let err = DescriptionUpdate::failed("Vapi", "timeout");
        assert!(err.is_failure());
        assert_eq!(err.outcome, FetchOutcome::Failed("timeout".into()));
    }
}
