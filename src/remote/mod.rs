//! HTTP client for the hosted table service.

pub mod client;
pub mod error;

pub use client::{TABLE_NAME, TableClient};
pub use error::SubmitError;
