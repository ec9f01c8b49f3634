use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single client call. The `Display` text is what the views
/// show to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
    #[error("incident id is required")]
    MissingId,
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("Request failed with status code {}", .0.as_u16())]
    Status(StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}
