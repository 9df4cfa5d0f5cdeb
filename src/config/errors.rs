use thiserror::Error;

use crate::task::TaskError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Task construction failed: {0}")]
    Task(#[from] TaskError),
}
