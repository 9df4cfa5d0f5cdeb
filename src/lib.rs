//! Reinforcement-learning task layer for a quadcopter ascent controller.
//!
//! A [`Task`] owns one [`Simulator`] and exposes the `reset`/`step`
//! environment contract: stacked observations, a shaped reward and
//! termination once the target altitude is reached or the simulator ends
//! the episode.

pub mod config;
pub mod physics;
pub mod rewards;
pub mod state;
pub mod task;

pub use config::{ConfigError, TaskConfig, TaskConfigBuilder};
pub use physics::{InitialConditions, Simulator, SimulatorError, StepOutcome};
pub use rewards::{HeightPolicy, RewardError, RewardFormula, RewardFunction, ShapingTerms};
pub use state::{Pose, SimSnapshot};
pub use task::{Action, ActionSpace, Observation, ObservationLayout, StepResult, Task, TaskError};
