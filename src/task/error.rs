use thiserror::Error;

use crate::physics::SimulatorError;
use crate::rewards::RewardError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    #[error("Simulator error: {0}")]
    Simulator(#[from] SimulatorError),

    #[error("Reward error: {0}")]
    Reward(#[from] RewardError),

    #[error("Invalid target position: {0}")]
    InvalidTarget(String),

    #[error("Action repeat must be at least 1, got {0}")]
    InvalidActionRepeat(usize),
}
