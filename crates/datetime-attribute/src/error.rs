//! Error types for datetime-attribute operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttributeError {
    #[error("Invalid timezone: {0}")]
    InvalidZone(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, AttributeError>;
