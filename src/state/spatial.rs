use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Position and Euler attitude of the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Euler angles (roll, pitch, yaw) [rad]
    pub attitude: Vector3<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: Vector3::zeros(),
        }
    }
}

impl Pose {
    pub fn new(position: Vector3<f64>, attitude: Vector3<f64>) -> Self {
        Self { position, attitude }
    }

    /// Create a level pose at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Build from the flat `[x, y, z, roll, pitch, yaw]` layout
    pub fn from_slice(values: &[f64; 6]) -> Self {
        Self {
            position: Vector3::new(values[0], values[1], values[2]),
            attitude: Vector3::new(values[3], values[4], values[5]),
        }
    }

    pub fn altitude(&self) -> f64 {
        self.position.z
    }

    pub fn roll(&self) -> f64 {
        self.attitude.x
    }

    pub fn pitch(&self) -> f64 {
        self.attitude.y
    }

    pub fn yaw(&self) -> f64 {
        self.attitude.z
    }

    pub fn to_array(&self) -> [f64; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.attitude.x,
            self.attitude.y,
            self.attitude.z,
        ]
    }
}

/// Read-only record of the simulator state after a reset or a timestep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    /// Elapsed episode time [s]
    pub time: f64,
    pub pose: Pose,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Euler angle rates [rad/s]
    pub angular_velocity: Vector3<f64>,
    /// Linear acceleration from the last integration step [m/s²]
    pub linear_accel: Vector3<f64>,
}

impl Default for SimSnapshot {
    fn default() -> Self {
        Self {
            time: 0.0,
            pose: Pose::default(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            linear_accel: Vector3::zeros(),
        }
    }
}

impl SimSnapshot {
    /// Pose ⧺ velocity ⧺ angular velocity
    pub fn kinematic_sample(&self) -> [f64; 12] {
        let mut sample = [0.0; 12];
        sample[..6].copy_from_slice(&self.pose.to_array());
        sample[6..9].copy_from_slice(self.velocity.as_slice());
        sample[9..].copy_from_slice(self.angular_velocity.as_slice());
        sample
    }
}
