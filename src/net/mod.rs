//! Outbound HTTP: the shared API client and its configuration.

pub mod api;

pub use api::{ApiClient, ApiConfig, ApiError};
