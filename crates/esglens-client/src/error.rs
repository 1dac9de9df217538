use thiserror::Error;

/// Loader failure taxonomy. Transport failures and non-2xx responses are
/// distinct variants but receive the same downstream treatment (fallback
/// to mock data). An empty result body is success, never an error.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("backend returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ureq::Error> for ClientError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => ClientError::Status(code),
            other => ClientError::Transport(other.to_string()),
        }
    }
}
