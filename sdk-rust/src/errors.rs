use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaamError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The API key could not be resolved at request time (e.g. the
    /// configured environment variable is unset or empty).
    #[error("Missing API key: {0}")]
    MissingApiKey(String),
    /// The request to the API failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the API was unexpected. (e.g. a mocked client ran
    /// out of queued responses)
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type SaamResult<T> = Result<T, SaamError>;
