//! Description fetch pipeline
//!
//! Walks the tool list in order and asks the provider about one tool at a
//! time. Each result, success or failure, is published as a
//! [`DescriptionUpdate`] before the next request starts. A failing tool never
//! stops the run; there are no retries and no cancellation.

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::{DescriptionUpdate, DirectoryState};
use crate::error::{Result, TooldexError};
use crate::llm::{DescriptionProvider, Usage};

/// Capacity of the update channel handed out by [`spawn`]
pub const UPDATE_CHANNEL_CAPACITY: usize = 32;

/// Summary of one full pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub succeeded: usize,
    pub failed: usize,
    /// Provider token usage at the end of the run
    pub usage: Usage,
}

impl PipelineReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Fetch one description and turn the result into an update.
///
/// Provider text is trimmed; text that is empty after trimming counts as a
/// failure so the row never stays blank.
pub async fn fetch_one<P>(provider: &P, name: &str) -> DescriptionUpdate
where
    P: DescriptionProvider + ?Sized,
{
    match provider.describe(name).await {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                error!("Provider returned an empty description for {}", name);
                DescriptionUpdate::failed(name, "empty description")
            } else {
                DescriptionUpdate::described(name, trimmed)
            }
        }
        Err(e) => {
            error!("Failed to fetch description for {}: {}", name, e);
            DescriptionUpdate::failed(name, e.to_string())
        }
    }
}

/// Run the pipeline over `names`, sending one update per tool, in order.
///
/// If the receiver is dropped the run still completes; remaining updates are
/// discarded.
pub async fn run<P>(provider: &P, names: &[String], updates: &mpsc::Sender<DescriptionUpdate>) -> PipelineReport
where
    P: DescriptionProvider + ?Sized,
{
    info!("Fetching {} descriptions with {}", names.len(), provider.model());
    let mut report = PipelineReport::default();
    let mut receiver_gone = false;

    for name in names {
        let update = fetch_one(provider, name).await;
        if update.is_failure() {
            report.failed += 1;
        } else {
            report.succeeded += 1;
        }
        debug!("Description settled for {} ({}/{})", name, report.total(), names.len());

        if !receiver_gone && updates.send(update).await.is_err() {
            warn!("Update receiver dropped; finishing run without publishing");
            receiver_gone = true;
        }
    }

    report.usage = provider.usage();
    info!(
        "Description pipeline finished: {} succeeded, {} failed, {} tokens ({} in, {} out)",
        report.succeeded,
        report.failed,
        report.usage.total(),
        report.usage.input_tokens,
        report.usage.output_tokens
    );
    report
}

/// Start the pipeline as a background task.
///
/// Returns the task handle and the receiving end of the update channel.
pub fn spawn(
    provider: Arc<dyn DescriptionProvider>,
    names: Vec<String>,
) -> (JoinHandle<PipelineReport>, mpsc::Receiver<DescriptionUpdate>) {
    let (tx, rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);
    let handle = tokio::spawn(async move { run(provider.as_ref(), &names, &tx).await });
    (handle, rx)
}

/// Run the pipeline over the rows of `state` and fold every update into it.
///
/// `on_update` sees each update right after it is applied. Used where no UI
/// loop owns the state (headless export).
pub async fn populate<F>(
    provider: Arc<dyn DescriptionProvider>,
    state: &mut DirectoryState,
    mut on_update: F,
) -> Result<PipelineReport>
where
    F: FnMut(&DescriptionUpdate, &DirectoryState),
{
    let names = state.entries().iter().map(|e| e.name.clone()).collect();
    let (handle, mut rx) = spawn(provider, names);

    while let Some(update) = rx.recv().await {
        state.apply(&update);
        on_update(&update, state);
    }

    handle
        .await
        .map_err(|e| TooldexError::Provider(format!("Description pipeline task failed: {}", e)))
}
