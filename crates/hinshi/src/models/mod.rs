//! models module
pub mod node_wrapper;

/// Re-exports
pub use node_wrapper::{NodeWrapper, UNKNOWN_FIELD, WordForm};
