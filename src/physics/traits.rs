use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::physics::error::SimulatorError;
use crate::state::{Pose, SimSnapshot};
use crate::task::Action;

/// Episode time limit used when none is given [s]
pub const DEFAULT_RUNTIME: f64 = 5.0;

/// Starting state handed to the simulator at construction and restored on
/// every reset. Unset fields fall back to the simulator's own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    pub pose: Option<Pose>,
    pub velocity: Option<Vector3<f64>>,
    pub angular_velocity: Option<Vector3<f64>>,
    pub runtime: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            pose: None,
            velocity: None,
            angular_velocity: None,
            runtime: DEFAULT_RUNTIME,
        }
    }
}

impl InitialConditions {
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = Some(pose);
        self
    }

    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: Vector3<f64>) -> Self {
        self.angular_velocity = Some(angular_velocity);
        self
    }

    pub fn with_runtime(mut self, runtime: f64) -> Self {
        self.runtime = runtime;
        self
    }
}

/// Result of advancing the simulator by a single timestep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub snapshot: SimSnapshot,
    /// Runtime exceeded or the vehicle left its operating envelope
    pub terminal: bool,
}

/// Rigid-body simulator driven by rotor speed commands.
///
/// Implementations own all physical state. The task layer only sees the
/// [`SimSnapshot`] records returned from `reset` and `next_timestep`.
pub trait Simulator {
    /// Build a simulator for the given start state. Rejecting a non-positive
    /// runtime is the simulator's responsibility.
    fn new(initial: InitialConditions) -> Result<Self, SimulatorError>
    where
        Self: Sized;

    /// Restore the initial state with time set to zero
    fn reset(&mut self) -> SimSnapshot;

    fn next_timestep(&mut self, action: &Action) -> Result<StepOutcome, SimulatorError>;

    /// Current state without advancing
    fn snapshot(&self) -> SimSnapshot;
}
