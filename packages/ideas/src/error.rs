// ABOUTME: Error types for the ideas package
// ABOUTME: Defines all error variants for idea generation operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdeaError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IdeaError>;
