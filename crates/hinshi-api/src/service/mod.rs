//! service module
mod hinshi_api_service;

pub use hinshi_api_service::{HinshiApiService, HinshiApiServiceFull};
