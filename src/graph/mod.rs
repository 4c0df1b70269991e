//! Graph engine for cycle detection and completion ordering.

pub mod adjacency;
pub mod cycle;
pub mod order;

pub use adjacency::PrerequisiteGraph;
pub use cycle::{CycleDetector, CyclePath};
pub use order::completion_order;
