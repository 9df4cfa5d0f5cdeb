use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::physics::InitialConditions;
use crate::rewards::RewardFunction;
use crate::task::{ObservationLayout, DEFAULT_ACTION_REPEAT, DEFAULT_TARGET};

mod builders;
mod errors;

pub use builders::TaskConfigBuilder;
pub use errors::ConfigError;

/// Validated task configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub initial: InitialConditions,
    pub target: Vector3<f64>,
    pub action_repeat: usize,
    pub reward: RewardFunction,
    pub observation: ObservationLayout,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            initial: InitialConditions::default(),
            target: Vector3::from(DEFAULT_TARGET),
            action_repeat: DEFAULT_ACTION_REPEAT,
            reward: RewardFunction::default(),
            observation: ObservationLayout::default(),
        }
    }
}

impl TaskConfig {
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        TaskConfigBuilder::from_json(value)?.build()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        TaskConfigBuilder::from_yaml_str(yaml)?.build()
    }
}
