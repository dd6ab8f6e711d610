use thiserror::Error;

/// Failure modes of one macros API call
#[derive(Debug, Error)]
pub enum ZendeskError {
    /// The request could not be completed
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("macros API returned {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body is not valid JSON
    #[error("invalid JSON in response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON that does not match the macros page schema
    #[error("response does not match the macros schema: {0}")]
    Schema(String),
}
