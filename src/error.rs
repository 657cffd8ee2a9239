//! Error types for index construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;
