use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Invalid Level: {0}")]
    InvalidLevel(String),

    #[error("Malformed Score Data: {0}")]
    MalformedData(String),

    /// Every game recorded in the bucket timed out, so there is no time to
    /// average over.
    #[error("Average undefined: no games finished within the time limit")]
    UndefinedAverage,

    #[error("Invalid Query: {0}")]
    InvalidQuery(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type ScoreResult<T> = Result<T, ScoreError>;
