use thiserror::Error;

/// Failures outside the extraction core (configuration, input, output)
///
/// Extraction itself never fails: missing data becomes missing fields.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize messages: {0}")]
    Json(#[from] serde_json::Error),
}
