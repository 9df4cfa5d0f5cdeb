use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::config::{errors::ConfigError, TaskConfig};
use crate::physics::{InitialConditions, Simulator, DEFAULT_RUNTIME};
use crate::rewards::{HeightPolicy, RewardFormula, RewardFunction};
use crate::state::Pose;
use crate::task::{ObservationLayout, Task, DEFAULT_ACTION_REPEAT, DEFAULT_TARGET};

/// Partially specified task configuration, as read from JSON or YAML.
/// Missing fields take the task defaults in `build`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfigBuilder {
    pub init_pose: Option<Vec<f64>>,
    pub init_velocities: Option<Vec<f64>>,
    pub init_angle_velocities: Option<Vec<f64>>,
    pub runtime: Option<f64>,
    pub target_pos: Option<Vec<f64>>,
    pub action_repeat: Option<usize>,
    pub reward_formula: Option<RewardFormula>,
    pub height_policy: Option<HeightPolicy>,
    pub observation: Option<ObservationLayout>,
}

impl TaskConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_pose(mut self, pose: Pose) -> Self {
        self.init_pose = Some(pose.to_array().to_vec());
        self
    }

    pub fn init_velocities(mut self, velocity: Vector3<f64>) -> Self {
        self.init_velocities = Some(velocity.as_slice().to_vec());
        self
    }

    pub fn init_angle_velocities(mut self, angular_velocity: Vector3<f64>) -> Self {
        self.init_angle_velocities = Some(angular_velocity.as_slice().to_vec());
        self
    }

    pub fn runtime(mut self, runtime: f64) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn target_pos(mut self, target: Vector3<f64>) -> Self {
        self.target_pos = Some(target.as_slice().to_vec());
        self
    }

    pub fn action_repeat(mut self, action_repeat: usize) -> Self {
        self.action_repeat = Some(action_repeat);
        self
    }

    pub fn reward_formula(mut self, formula: RewardFormula) -> Self {
        self.reward_formula = Some(formula);
        self
    }

    pub fn height_policy(mut self, policy: HeightPolicy) -> Self {
        self.height_policy = Some(policy);
        self
    }

    pub fn observation(mut self, layout: ObservationLayout) -> Self {
        self.observation = Some(layout);
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let object = value.as_object().ok_or_else(|| invalid("task config", value))?;
        let unknown = object
            .iter()
            .find(|(key, _)| !KEYS.contains(&key.as_str()));
        if let Some((key, field_value)) = unknown {
            return Err(invalid(key, field_value));
        }

        let mut builder = Self::default();

        if let Some(pose) = field(value, "init_pose") {
            builder.init_pose = Some(parse_vector(pose, "init_pose")?);
        }

        if let Some(velocity) = field(value, "init_velocities") {
            builder.init_velocities = Some(parse_vector(velocity, "init_velocities")?);
        }

        if let Some(angular) = field(value, "init_angle_velocities") {
            builder.init_angle_velocities = Some(parse_vector(angular, "init_angle_velocities")?);
        }

        if let Some(runtime) = field(value, "runtime") {
            builder.runtime = Some(runtime.as_f64().ok_or_else(|| invalid("runtime", runtime))?);
        }

        if let Some(target) = field(value, "target_pos") {
            builder.target_pos = Some(parse_vector(target, "target_pos")?);
        }

        if let Some(repeat) = field(value, "action_repeat") {
            let repeat = repeat
                .as_u64()
                .and_then(|r| usize::try_from(r).ok())
                .ok_or_else(|| invalid("action_repeat", repeat))?;
            builder.action_repeat = Some(repeat);
        }

        if let Some(formula) = string_field(value, "reward_formula")? {
            builder.reward_formula = Some(match formula {
                "Ascent" => RewardFormula::Ascent,
                "Composite" => RewardFormula::Composite,
                "HeightRatio" => RewardFormula::HeightRatio,
                _ => {
                    return Err(ConfigError::InvalidParameter {
                        name: "reward_formula".into(),
                        value: formula.into(),
                    })
                }
            });
        }

        if let Some(policy) = string_field(value, "height_policy")? {
            builder.height_policy = Some(match policy {
                "Clamp" => HeightPolicy::Clamp,
                "Strict" => HeightPolicy::Strict,
                _ => {
                    return Err(ConfigError::InvalidParameter {
                        name: "height_policy".into(),
                        value: policy.into(),
                    })
                }
            });
        }

        if let Some(layout) = string_field(value, "observation")? {
            builder.observation = Some(match layout {
                "Full" => ObservationLayout::Full,
                "PoseOnly" => ObservationLayout::PoseOnly,
                _ => {
                    return Err(ConfigError::InvalidParameter {
                        name: "observation".into(),
                        value: layout.into(),
                    })
                }
            });
        }

        Ok(builder)
    }

    pub fn build(&self) -> Result<TaskConfig, ConfigError> {
        let pose = self
            .init_pose
            .as_deref()
            .map(|values| fixed::<6>("init_pose", values))
            .transpose()?
            .map(|values| Pose::from_slice(&values));

        let velocity = self
            .init_velocities
            .as_deref()
            .map(|values| fixed::<3>("init_velocities", values).map(Vector3::from))
            .transpose()?;

        let angular_velocity = self
            .init_angle_velocities
            .as_deref()
            .map(|values| fixed::<3>("init_angle_velocities", values).map(Vector3::from))
            .transpose()?;

        let target = match self.target_pos.as_deref() {
            Some(values) => Vector3::from(fixed::<3>("target_pos", values)?),
            None => Vector3::from(DEFAULT_TARGET),
        };
        if !(target.z > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "target altitude must be positive, got {}",
                target.z
            )));
        }

        let action_repeat = self.action_repeat.unwrap_or(DEFAULT_ACTION_REPEAT);
        if action_repeat == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "action_repeat".into(),
                value: action_repeat.to_string(),
            });
        }

        let config = TaskConfig {
            initial: InitialConditions {
                pose,
                velocity,
                angular_velocity,
                runtime: self.runtime.unwrap_or(DEFAULT_RUNTIME),
            },
            target,
            action_repeat,
            reward: RewardFunction::new(
                self.reward_formula.unwrap_or_default(),
                self.height_policy.unwrap_or_default(),
            ),
            observation: self.observation.unwrap_or_default(),
        };

        info!("Built task config: {:?}", config);

        Ok(config)
    }

    /// Build the configuration and construct a task around a new simulator
    pub fn build_task<S: Simulator>(&self) -> Result<Task<S>, ConfigError> {
        let config = self.build()?;
        Ok(Task::from_config(&config)?)
    }
}

/// Keys accepted by `from_json`, matching the serde field names
const KEYS: [&str; 9] = [
    "init_pose",
    "init_velocities",
    "init_angle_velocities",
    "runtime",
    "target_pos",
    "action_repeat",
    "reward_formula",
    "height_policy",
    "observation",
];

/// `None` when absent, an error when present but not a string
fn string_field<'a>(value: &'a Value, name: &str) -> Result<Option<&'a str>, ConfigError> {
    field(value, name)
        .map(|v| v.as_str().ok_or_else(|| invalid(name, v)))
        .transpose()
}

/// Look up a key, treating an explicit `null` as absent
fn field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.get(name).filter(|v| !v.is_null())
}

fn invalid(name: &str, value: &Value) -> ConfigError {
    ConfigError::InvalidParameter {
        name: name.into(),
        value: value.to_string(),
    }
}

fn parse_vector(value: &Value, name: &str) -> Result<Vec<f64>, ConfigError> {
    value
        .as_array()
        .ok_or_else(|| invalid(name, value))?
        .iter()
        .map(|v| v.as_f64().ok_or_else(|| invalid(name, value)))
        .collect()
}

fn fixed<const N: usize>(name: &str, values: &[f64]) -> Result<[f64; N], ConfigError> {
    values.try_into().map_err(|_| {
        ConfigError::ValidationError(format!(
            "{} expects {} values, got {}",
            name,
            N,
            values.len()
        ))
    })
}
