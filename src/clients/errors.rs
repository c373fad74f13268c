use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    // Any status other than 200. The response body is never inspected.
    #[error("search failed")]
    SearchFailed,

    #[error("Failed to parse search response, error: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Failed to decode `{field}` of result #{index}: {reason}")]
    Field {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(String),
}

pub type Result<T> = std::result::Result<T, Error>;
