use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::rewards::{error::RewardError, formula::HeightPolicy};
use crate::state::SimSnapshot;

/// Every shaping term available to a reward formula, evaluated for one
/// snapshot. Formulas pick which of these they sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapingTerms {
    /// `1 / (1 + 10 t)`
    pub time: f64,
    /// Raw `z / target.z`
    pub height_ratio: f64,
    /// `sqrt(z / target.z)` after the height policy is applied
    pub height: f64,
    /// `0.2 vz`
    pub vertical_velocity: f64,
    /// `az`
    pub accel: f64,
    /// `cos(pitch) (cos(pitch) + 1) - 1`
    pub vertical_angle: f64,
    /// `0.2 |v_xy|`
    pub horizontal_velocity: f64,
    /// `0.04 |omega|`
    pub angular_velocity: f64,
    /// `0.04 |omega_pitch|`
    pub pitch_rate: f64,
}

impl ShapingTerms {
    pub fn evaluate(
        snapshot: &SimSnapshot,
        target: &Vector3<f64>,
        policy: HeightPolicy,
    ) -> Result<Self, RewardError> {
        if !(target.z > 0.0) {
            return Err(RewardError::NonPositiveTarget { z: target.z });
        }

        let z = snapshot.pose.altitude();
        let height_ratio = z / target.z;
        let height = if height_ratio < 0.0 {
            match policy {
                HeightPolicy::Clamp => {
                    warn!("Altitude {} below ground, clamping height term to zero", z);
                    0.0
                }
                HeightPolicy::Strict => return Err(RewardError::NegativeAltitude { z }),
            }
        } else {
            height_ratio.sqrt()
        };

        let pitch = snapshot.pose.pitch().cos();
        let v = &snapshot.velocity;

        Ok(Self {
            time: 1.0 / (1.0 + 10.0 * snapshot.time),
            height_ratio,
            height,
            vertical_velocity: 0.2 * v.z,
            accel: snapshot.linear_accel.z,
            vertical_angle: pitch * (pitch + 1.0) - 1.0,
            horizontal_velocity: 0.2 * v.xy().norm(),
            angular_velocity: 0.04 * snapshot.angular_velocity.norm(),
            pitch_rate: 0.04 * snapshot.angular_velocity.y.abs(),
        })
    }
}
