//! Directory integration tests
//!
//! Drives the full catalog through the pipeline with a scripted provider and
//! checks the resulting state and CSV export.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tooldex::catalog::{CATALOG, tool_names};
use tooldex::domain::{DirectoryState, ERROR_SENTINEL, ToolEntry};
use tooldex::error::{Result, TooldexError};
use tooldex::export::{self, EXPORT_FILENAME};
use tooldex::llm::{DescriptionProvider, ScriptedProvider};
use tooldex::pipeline;
use tempfile::TempDir;

/// Full catalog: every row settles, names stay unique, order is kept
#[tokio::test]
async fn test_full_catalog_settles() -> Result<()> {
    let provider: Arc<dyn DescriptionProvider> = Arc::new(ScriptedProvider::new());
    let mut state = DirectoryState::from_catalog(CATALOG);

    let report = pipeline::populate(provider, &mut state, |_, _| {}).await?;

    assert_eq!(report.total(), 25);
    assert_eq!(state.len(), 25);
    assert!(!state.is_loading());

    let names: HashSet<&str> = state.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names.len(), 25);
    for (entry, item) in state.entries().iter().zip(CATALOG) {
        assert_eq!(entry.name, item.name);
        assert!(!entry.description.text().is_empty());
    }
    Ok(())
}

/// Updates arrive in catalog order, one call at a time
#[tokio::test]
async fn test_updates_are_sequential_and_ordered() -> Result<()> {
    let scripted = Arc::new(ScriptedProvider::new().with_delay(Duration::from_millis(2)));
    let provider: Arc<dyn DescriptionProvider> = scripted.clone();
    let mut state = DirectoryState::from_catalog(CATALOG);

    let mut seen = Vec::new();
    pipeline::populate(provider, &mut state, |update, _| seen.push(update.name.clone())).await?;

    assert_eq!(seen, tool_names(CATALOG));
    assert_eq!(scripted.calls(), tool_names(CATALOG));
    assert_eq!(scripted.max_in_flight(), 1);
    Ok(())
}

/// A failure in the middle doesn't stop later tools
#[tokio::test]
async fn test_failure_does_not_abort_run() -> Result<()> {
    let failing = CATALOG[4].name;
    let provider: Arc<dyn DescriptionProvider> =
        Arc::new(ScriptedProvider::new().with_failure(failing, "quota exhausted"));
    let mut state = DirectoryState::from_catalog(CATALOG);

    let report = pipeline::populate(provider, &mut state, |_, _| {}).await?;

    assert_eq!(report.failed, 1);
    assert_eq!(report.succeeded, 24);
    assert_eq!(state.get(failing).map(|e| e.description.text()), Some(ERROR_SENTINEL));
    for entry in &state.entries()[5..] {
        assert_ne!(entry.description.text(), ERROR_SENTINEL);
    }
    Ok(())
}

/// Export is refused mid-run and succeeds, byte-identically, afterwards
#[tokio::test]
async fn test_export_gated_until_settled() -> Result<()> {
    let dir = TempDir::new()?;
    let provider: Arc<dyn DescriptionProvider> = Arc::new(
        ScriptedProvider::new().with_reply("Suno", "Generates \"full\" songs from a prompt."),
    );
    let mut state = DirectoryState::from_catalog(CATALOG);

    let mut refused_midway = 0;
    let mut snapshot_state = None;
    pipeline::populate(provider, &mut state, |_, state| {
        if state.is_loading() && export::snapshot(state).is_err() {
            refused_midway += 1;
        }
        if !state.is_loading() {
            snapshot_state = Some(state.clone());
        }
    })
    .await?;

    assert_eq!(refused_midway, 24);
    assert_eq!(snapshot_state.as_ref(), Some(&state));

    let first = export::export_to_dir(&state, dir.path())?;
    let bytes_first = std::fs::read(&first)?;
    let second = export::export_to_dir(&state, dir.path())?;
    let bytes_second = std::fs::read(&second)?;

    assert_eq!(first, dir.path().join(EXPORT_FILENAME));
    assert_eq!(bytes_first, bytes_second);

    let text = String::from_utf8_lossy(&bytes_first);
    assert!(text.starts_with("Tool Name,Description,Link\n"));
    assert!(text.contains("\"Suno\",\"Generates \"\"full\"\" songs from a prompt.\",\"https://suno.com/\""));
    assert_eq!(text.lines().count(), 26);
    Ok(())
}

/// The worked escaping example
#[test]
fn test_csv_quote_doubling() -> Result<()> {
    let csv = export::render_csv(&[ToolEntry::with_description("A", "http://x", "He said \"hi\"")])?;
    assert_eq!(csv.lines().nth(1), Some("\"A\",\"He said \"\"hi\"\"\",\"http://x\""));
    Ok(())
}

/// Nothing is written while rows are pending
#[test]
fn test_export_refused_while_loading() -> Result<()> {
    let dir = TempDir::new()?;
    let state = DirectoryState::from_catalog(CATALOG);
    match export::export_to_dir(&state, dir.path()) {
        Err(TooldexError::ExportUnavailable { pending }) => assert_eq!(pending, 25),
        other => panic!("expected ExportUnavailable, got {:?}", other),
    }
    assert!(!dir.path().join(EXPORT_FILENAME).exists());
    Ok(())
}
