use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::TaskConfig;
use crate::physics::{InitialConditions, Simulator};
use crate::rewards::{RewardError, RewardFunction};
use crate::task::{
    action::{Action, ActionSpace},
    error::TaskError,
    observation::{Observation, ObservationLayout},
};

pub const DEFAULT_ACTION_REPEAT: usize = 3;

/// Goal position used when none is configured [m]
pub const DEFAULT_TARGET: [f64; 3] = [0.0, 0.0, 10.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    /// Sum of the per-substep rewards
    pub reward: f64,
    /// Termination as evaluated on the final substep
    pub done: bool,
}

/// Environment that drives a simulator towards a target altitude and scores
/// the agent's rotor commands.
#[derive(Debug)]
pub struct Task<S: Simulator> {
    sim: S,
    target: Vector3<f64>,
    action_repeat: usize,
    action_space: ActionSpace,
    reward_fn: RewardFunction,
    layout: ObservationLayout,
}

impl<S: Simulator> Task<S> {
    /// Create a task with the default repeat, reward and observation layout.
    /// The target defaults to [`DEFAULT_TARGET`].
    pub fn new(initial: InitialConditions, target: Option<Vector3<f64>>) -> Result<Self, TaskError> {
        let config = TaskConfig {
            initial,
            target: target.unwrap_or_else(|| Vector3::from(DEFAULT_TARGET)),
            ..Default::default()
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &TaskConfig) -> Result<Self, TaskError> {
        if config.action_repeat == 0 {
            return Err(TaskError::InvalidActionRepeat(config.action_repeat));
        }
        validate_target(&config.target)?;

        let sim = S::new(config.initial)?;

        info!(
            "Created task with target {:?}, action repeat {}, {:?} reward",
            config.target.as_slice(),
            config.action_repeat,
            config.reward.formula
        );

        Ok(Self {
            sim,
            target: config.target,
            action_repeat: config.action_repeat,
            action_space: ActionSpace::default(),
            reward_fn: config.reward,
            layout: config.observation,
        })
    }

    /// Start a new episode. The post-reset reading is stacked
    /// `action_repeat` times.
    pub fn reset(&mut self) -> Observation {
        let snapshot = self.sim.reset();
        info!("Episode reset at altitude {}", snapshot.pose.altitude());

        Observation::repeated(self.layout, &snapshot, self.action_repeat)
    }

    /// Apply `action` for `action_repeat` simulator timesteps.
    ///
    /// Every substep runs even after one reports termination; `done` reflects
    /// the final substep only.
    pub fn step(&mut self, action: &Action) -> Result<StepResult, TaskError> {
        let mut reward = 0.0;
        let mut done = false;
        let mut observation = Observation::with_capacity(self.layout, self.action_repeat);

        for substep in 0..self.action_repeat {
            let outcome = self.sim.next_timestep(action)?;
            if done {
                debug!("Substep {} running after an earlier terminal substep", substep);
            }

            done = outcome.terminal || outcome.snapshot.pose.altitude() >= self.target.z;
            reward += self.reward_fn.evaluate(&outcome.snapshot, &self.target)?;
            observation.push(&outcome.snapshot);
        }

        debug!("Step reward {} done {}", reward, done);

        Ok(StepResult {
            observation,
            reward,
            done,
        })
    }

    /// Reward for the simulator's current state
    pub fn get_reward(&self) -> Result<f64, RewardError> {
        self.reward_fn.evaluate(&self.sim.snapshot(), &self.target)
    }

    pub fn action_repeat(&self) -> usize {
        self.action_repeat
    }

    /// Length of every observation returned by `reset` and `step`
    pub fn state_size(&self) -> usize {
        self.action_repeat * self.layout.sample_size()
    }

    pub fn action_space(&self) -> &ActionSpace {
        &self.action_space
    }

    pub fn target(&self) -> &Vector3<f64> {
        &self.target
    }

    pub fn reward_function(&self) -> &RewardFunction {
        &self.reward_fn
    }

    pub fn observation_layout(&self) -> ObservationLayout {
        self.layout
    }

    pub fn simulator(&self) -> &S {
        &self.sim
    }
}

fn validate_target(target: &Vector3<f64>) -> Result<(), TaskError> {
    if !target.iter().all(|v| v.is_finite()) {
        return Err(TaskError::InvalidTarget(format!(
            "non-finite coordinates {:?}",
            target.as_slice()
        )));
    }
    if target.z <= 0.0 {
        return Err(TaskError::InvalidTarget(format!(
            "altitude must be positive, got {}",
            target.z
        )));
    }
    Ok(())
}
