use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("API quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error (HTTP {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed response at {path}")]
    MalformedResponse { path: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Only transport-level failures are worth another attempt; auth and quota
    /// failures would fail identically and surface immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::MalformedResponse {
                path: format!("$ ({e})"),
            }
        } else {
            // Timeouts, connect failures and other transport errors.
            Error::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_network_errors_are_retryable() {
        assert!(Error::Network("timeout".into()).is_retryable());
        assert!(!Error::Auth("bad key".into()).is_retryable());
        assert!(!Error::QuotaExceeded("limit".into()).is_retryable());
        assert!(!Error::Upstream { status: 500, body: String::new() }.is_retryable());
        assert!(!Error::MalformedResponse { path: "$".into() }.is_retryable());
    }
}
