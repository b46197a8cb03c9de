use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Connectivity problems, timeouts, non-HTTP failures.
    #[error("fetching over network failed: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("decoding json failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed response missing a structurally required part.
    #[error("missing key in response: {0}")]
    MissingKey(&'static str),

    /// The configured endpoint could not be assembled into a URL.
    #[error("invalid jolokia url: {0}")]
    Url(#[from] url::ParseError),
}

// Carried as a rendered string so in-memory fakes can construct
// transport failures without a live socket.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
