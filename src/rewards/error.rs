use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RewardError {
    #[error("Target altitude must be positive, got {z}")]
    NonPositiveTarget { z: f64 },

    #[error("Altitude {z} is below the ground plane")]
    NegativeAltitude { z: f64 },
}
