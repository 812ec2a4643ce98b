use thiserror::Error;

/// Errors generated by the hashcheck client.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a line of the range response
    /// cannot be parsed.
    #[error("malformed range response line {0:?}")]
    MalformedResponse(String),

    /// Error generated by the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
