use thiserror::Error;

pub type Result<T> = std::result::Result<T, RailError>;

#[derive(Debug, Error)]
pub enum RailError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("artifact format error: {0}")]
    ArtifactFormat(String),
}
