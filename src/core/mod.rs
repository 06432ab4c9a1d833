//! Typed dataset model for prospect-viz.
//!
//! The loosely-structured analysis JSON is mapped into these types at load
//! time; nothing downstream sees raw JSON or sentinel values.

pub mod schema;

// Re-export key types for convenience
pub use schema::{Dataset, Player, Release};
