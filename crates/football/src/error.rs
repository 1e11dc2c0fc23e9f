use thiserror::Error;

pub type Result<T> = std::result::Result<T, FootballError>;

/// Everything that can go wrong talking to the match-data API, or to the
/// vote server from the command line.
#[derive(Error, Debug)]
pub enum FootballError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream responded with status {0}")]
    UpstreamStatus(u16),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
