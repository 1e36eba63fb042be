//! Response Model Definition

use hinshi::NodeWrapper;
use serde::Serialize;

/// Word extraction response
#[derive(Debug, Serialize)]
pub struct WordsResponse {
  /// Extracted words in document order (duplicates kept)
  pub words: Vec<String>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Node list response
#[derive(Debug, Serialize)]
pub struct NodesResponse {
  /// Analysis nodes, boundary markers excluded
  pub nodes: Vec<NodeWrapper>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}
