use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulatorError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Physics computation error: {0}")]
    ComputationError(String),
}
