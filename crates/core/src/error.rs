use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("missing credential")]
    MissingCredential,
    #[error("invalid search filter: {0}")]
    InvalidFilter(String),
}
