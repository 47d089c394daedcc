use thiserror::Error;

/// Failure kinds for a single advice attempt (service call, response
/// parse, count check). The retry policy inspects the kind to decide
/// whether another attempt is worthwhile.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("service returned no candidates")]
    EmptyResponse,

    #[error("no JSON array found in response text")]
    MissingArray,

    #[error("invalid JSON in response: {0}")]
    InvalidJson(String),

    #[error("advice item missing \"{0}\" key")]
    MissingKey(&'static str),

    #[error("expected {expected} advice items, got {got}")]
    CountMismatch { expected: usize, got: usize },
}

impl From<reqwest::Error> for AdviceError {
    fn from(err: reqwest::Error) -> Self {
        AdviceError::Network(err.to_string())
    }
}
