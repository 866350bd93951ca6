use thiserror::Error;

/// Reasons a candidate page yielded no usable text. None of these abort an
/// enrichment on their own; the pipeline moves on to the next candidate.
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request timeout")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("http error {status}")]
    Http { status: reqwest::StatusCode },

    #[error("extracted text too short ({0} chars)")]
    TooShort(usize),

    #[error("io error: {0}")]
    Io(String),
}

impl ReaderError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Http { status }
        } else {
            Self::Transport(err.to_string())
        }
    }
}
