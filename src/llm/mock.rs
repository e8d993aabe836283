//! Scripted provider for tests and offline runs
//!
//! Answers from a fixed table of replies and records every call, including how
//! many calls were in flight at once.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Result, TooldexError};
use crate::llm::client::DescriptionProvider;
use crate::llm::types::Usage;

/// Canned reply for one tool
#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(String),
}

/// A [`DescriptionProvider`] driven by a table of replies
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    replies: HashMap<String, Reply>,
    delay: Option<Duration>,
    per_call: Usage,
    usage: Mutex<Usage>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `name` with `text`
    pub fn with_reply(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.replies.insert(name.into(), Reply::Text(text.into()));
        self
    }

    /// Fail requests for `name`
    pub fn with_failure(mut self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        self.replies.insert(name.into(), Reply::Fail(reason.into()));
        self
    }

    /// Sleep this long inside every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Meter every call as costing `usage`
    pub fn with_usage_per_call(mut self, usage: Usage) -> Self {
        self.per_call = usage;
        self
    }

    /// Names requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Highest number of concurrent `describe` calls observed
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DescriptionProvider for ScriptedProvider {
    async fn describe(&self, tool_name: &str) -> Result<String> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(tool_name.to_string());
        }
        if let Ok(mut usage) = self.usage.lock() {
            usage.add(&self.per_call);
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let result = match self.replies.get(tool_name) {
            Some(Reply::Text(text)) => Ok(text.clone()),
            Some(Reply::Fail(reason)) => Err(TooldexError::Provider(reason.clone())),
            None => Ok(format!("{} is a scripted tool.", tool_name)),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn model(&self) -> &str {
        "scripted"
    }

    fn usage(&self) -> Usage {
        self.usage.lock().map(|u| *u).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_replies() {
        let provider = ScriptedProvider::new()
            .with_reply("Suno", "Makes songs.")
            .with_failure("Bolt", "quota");

        assert_eq!(provider.describe("Suno").await.unwrap(), "Makes songs.");
        assert!(provider.describe("Bolt").await.is_err());
        assert_eq!(provider.describe("Krea").await.unwrap(), "Krea is a scripted tool.");
        assert_eq!(provider.calls(), vec!["Suno", "Bolt", "Krea"]);
        assert_eq!(provider.max_in_flight(), 1);
    }

    #[tokio::test]
    async fn test_scripted_usage_metering() {
        let provider = ScriptedProvider::new().with_usage_per_call(Usage::new(4, 2));
        assert_eq!(provider.usage(), Usage::default());

        provider.describe("Suno").await.unwrap();
        provider.describe("Bolt").await.unwrap();
        assert_eq!(provider.usage(), Usage::new(8, 4));
    }
}
