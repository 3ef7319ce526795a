//! Flowutil Library
//!
//! Workflow-orchestration utilities: reliable termination of whole process
//! trees via graceful-to-forceful signal escalation, and construction of task
//! dependency graphs with chain and cross-link semantics.

pub mod batch;
pub mod config;
pub mod error;
pub mod graph;
pub mod merge;
pub mod platform;
pub mod reaper;
pub mod utils;

// Re-export commonly used types for convenience
pub use batch::{chunks, reduce_in_chunks, Chunks};
pub use error::{BatchError, LinkError, ReapError};
pub use graph::{Rung, TaskGraph, TaskId, TaskNode};
pub use merge::merge_values;
pub use reaper::reap_process_group;
