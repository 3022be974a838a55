use crate::core::ContainerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ContainerError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
