//! モデルモジュール

mod request;
mod response;

pub use request::{NodesRequest, WordsRequest};
pub use response::{NodesResponse, WordsResponse};
