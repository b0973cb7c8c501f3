use crate::model::ValidationError;

/// Errors that can occur while submitting a record.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The record failed local validation; no request was made.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The request could not be completed (connection, timeout, TLS).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    ///
    /// Carries the raw response body so the user sees exactly what the
    /// service said.
    #[error("submission rejected ({status}): {body}")]
    Rejected { status: u16, body: String },
}
