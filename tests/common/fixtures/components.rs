use nalgebra::Vector3;
use quadtask::{Action, InitialConditions, Pose};

use super::physics::{GRAVITY, THRUST_GAIN};

/// Rotor command that exactly cancels gravity in `VerticalSim`
pub fn hover_action() -> Action {
    Action::uniform(GRAVITY / THRUST_GAIN)
}

pub fn climb_action() -> Action {
    Action::uniform(800.0)
}

/// Level start at the given altitude
pub fn initial_at(z: f64) -> InitialConditions {
    InitialConditions::default().with_pose(Pose::at_position(Vector3::new(0.0, 0.0, z)))
}
