//! Domain types for Tooldex
//!
//! - ToolEntry / Description: one directory row and its description lifecycle
//! - DescriptionUpdate: what the fetch pipeline publishes per tool
//! - DirectoryState: ordered rows plus the reduction that applies updates

pub mod entry;
pub mod state;
pub mod update;

pub use entry::{Description, ERROR_SENTINEL, ToolEntry};
pub use state::DirectoryState;
pub use update::{DescriptionUpdate, FetchOutcome};
