//! The description provider seam
//!
//! The pipeline only needs "name in, short description out". Anything that can
//! answer that (the Gemini client, a scripted stand-in) implements
//! [`DescriptionProvider`].

use async_trait::async_trait;

use crate::error::Result;
use crate::llm::types::Usage;

/// Returns a short natural-language description for a tool name
#[async_trait]
pub trait DescriptionProvider: Send + Sync {
    /// Ask for a description of `tool_name`.
    ///
    /// Implementations return the raw provider text; trimming and empty checks
    /// happen in the pipeline.
    async fn describe(&self, tool_name: &str) -> Result<String>;

    /// Model or backend identifier, for logs
    fn model(&self) -> &str;

    /// Tokens consumed so far; backends that don't meter report zero
    fn usage(&self) -> Usage {
        Usage::default()
    }
}

/// Build the instruction sent to the provider for one tool
pub fn build_prompt(tool_name: &str) -> String {
    format!(
        "Provide a concise, one-sentence description for the AI tool named '{}'. \
         The description should explain its primary function or use case. \
         Focus on what it does for the user.",
        tool_name
    )
}
