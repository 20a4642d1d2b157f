use thiserror::Error;

/// Custom error types for better error handling
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),
    #[error("Empty input sequence")]
    EmptyInput,
}
