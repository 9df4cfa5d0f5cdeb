use std::cell::RefCell;
use std::collections::VecDeque;

use nalgebra::Vector3;
use quadtask::{
    Action, InitialConditions, Pose, SimSnapshot, Simulator, SimulatorError, StepOutcome,
};

/// Simulator timestep [s]
pub const DT: f64 = 0.02;
pub const GRAVITY: f64 = 9.81;
/// Vertical acceleration per unit of mean rotor speed
pub const THRUST_GAIN: f64 = 0.025;

/// Vertical-only point mass. Mean rotor speed sets the climb acceleration;
/// the episode ends once the runtime is used up or the vehicle hits the ground.
#[derive(Debug, Clone)]
pub struct VerticalSim {
    initial: SimSnapshot,
    state: SimSnapshot,
    runtime: f64,
}

impl Simulator for VerticalSim {
    fn new(initial: InitialConditions) -> Result<Self, SimulatorError> {
        if initial.runtime <= 0.0 {
            return Err(SimulatorError::InvalidParameter(format!(
                "runtime must be positive, got {}",
                initial.runtime
            )));
        }

        let state = SimSnapshot {
            time: 0.0,
            pose: initial
                .pose
                .unwrap_or_else(|| Pose::at_position(Vector3::new(0.0, 0.0, 10.0))),
            velocity: initial.velocity.unwrap_or_else(Vector3::zeros),
            angular_velocity: initial.angular_velocity.unwrap_or_else(Vector3::zeros),
            linear_accel: Vector3::zeros(),
        };

        Ok(Self {
            initial: state,
            state,
            runtime: initial.runtime,
        })
    }

    fn reset(&mut self) -> SimSnapshot {
        self.state = self.initial;
        self.state
    }

    fn next_timestep(&mut self, action: &Action) -> Result<StepOutcome, SimulatorError> {
        let speeds = &action.rotor_speeds;
        let mean_speed = speeds.iter().sum::<f64>() / speeds.len() as f64;
        let az = THRUST_GAIN * mean_speed - GRAVITY;

        let s = &mut self.state;
        s.linear_accel = Vector3::new(0.0, 0.0, az);
        s.velocity.z += az * DT;
        s.pose.position.z += s.velocity.z * DT;
        s.time += DT;

        let mut terminal = s.time > self.runtime;
        if s.pose.position.z <= 0.0 {
            s.pose.position.z = 0.0;
            s.velocity.z = 0.0;
            terminal = true;
        }

        Ok(StepOutcome {
            snapshot: self.state,
            terminal,
        })
    }

    fn snapshot(&self) -> SimSnapshot {
        self.state
    }
}

thread_local! {
    static SCRIPT: RefCell<Vec<(f64, bool)>> = const { RefCell::new(Vec::new()) };
}

/// Load the `(altitude, terminal)` outcomes the next `ScriptedSim` on this
/// thread will replay
pub fn load_script(script: &[(f64, bool)]) {
    SCRIPT.with(|s| *s.borrow_mut() = script.to_vec());
}

/// Replays a fixed list of outcomes, failing once the list runs out
#[derive(Debug)]
pub struct ScriptedSim {
    initial: SimSnapshot,
    state: SimSnapshot,
    pending: VecDeque<(f64, bool)>,
}

impl Simulator for ScriptedSim {
    fn new(initial: InitialConditions) -> Result<Self, SimulatorError> {
        let state = SimSnapshot {
            pose: initial.pose.unwrap_or_default(),
            ..Default::default()
        };
        let pending = SCRIPT.with(|s| s.borrow().iter().copied().collect());

        Ok(Self {
            initial: state,
            state,
            pending,
        })
    }

    fn reset(&mut self) -> SimSnapshot {
        self.state = self.initial;
        self.state
    }

    fn next_timestep(&mut self, _action: &Action) -> Result<StepOutcome, SimulatorError> {
        let (altitude, terminal) = self
            .pending
            .pop_front()
            .ok_or_else(|| SimulatorError::ComputationError("script exhausted".into()))?;

        self.state.time += DT;
        self.state.pose.position.z = altitude;

        Ok(StepOutcome {
            snapshot: self.state,
            terminal,
        })
    }

    fn snapshot(&self) -> SimSnapshot {
        self.state
    }
}
