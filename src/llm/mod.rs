//! Description provider layer - Gemini API integration
//!
//! This module provides:
//! - DescriptionProvider trait for the provider boundary
//! - GeminiClient implementation
//! - Wire types for `generateContent`
//! - ScriptedProvider for tests and offline runs

pub mod client;
pub mod gemini;
pub mod mock;
pub mod types;

pub use client::{DescriptionProvider, build_prompt};
pub use gemini::{GeminiClient, GeminiConfig, resolve_api_key};
pub use mock::ScriptedProvider;
pub use types::{GenerateContentRequest, GenerateContentResponse, Usage};
