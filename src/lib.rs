//! Tooldex - a directory of AI tools with generated descriptions
//!
//! A fixed catalog of tools is enriched, one tool at a time, with a
//! one-sentence description from a generative-text provider. Results are shown
//! in a terminal table and can be exported to CSV once every row is settled.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod llm;
pub mod pipeline;
pub mod tui;

pub use error::{Result, TooldexError};
