use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::rewards::{error::RewardError, terms::ShapingTerms};
use crate::state::SimSnapshot;

/// How the reward combines the available shaping terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RewardFormula {
    /// Time, height, climb rate and attitude terms
    #[default]
    Ascent,
    /// Ascent terms plus acceleration with horizontal and angular penalties
    Composite,
    /// Linear progress towards the target altitude only
    HeightRatio,
}

/// Treatment of altitudes below the ground plane in the height term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeightPolicy {
    /// Clamp the altitude ratio to zero before taking the square root
    #[default]
    Clamp,
    /// Report a domain error
    Strict,
}

impl RewardFormula {
    pub fn combine(&self, terms: &ShapingTerms) -> f64 {
        match self {
            RewardFormula::Ascent => {
                1.0 * terms.time
                    + 10.0 * terms.height
                    + 10.0 * terms.vertical_velocity
                    + 2.0 * terms.vertical_angle
            }
            RewardFormula::Composite => {
                1.0 * terms.time
                    + 10.0 * terms.height
                    + 10.0 * terms.vertical_velocity
                    + 0.5 * terms.accel
                    + 0.1 * terms.vertical_angle
                    - 0.2 * terms.horizontal_velocity
                    - 0.1 * terms.angular_velocity
                    - 0.1 * terms.pitch_rate
            }
            RewardFormula::HeightRatio => 10.0 * terms.height_ratio,
        }
    }
}

/// A reward formula paired with its altitude policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RewardFunction {
    pub formula: RewardFormula,
    pub height_policy: HeightPolicy,
}

impl RewardFunction {
    pub fn new(formula: RewardFormula, height_policy: HeightPolicy) -> Self {
        Self {
            formula,
            height_policy,
        }
    }

    pub fn evaluate(&self, snapshot: &SimSnapshot, target: &Vector3<f64>) -> Result<f64, RewardError> {
        let terms = ShapingTerms::evaluate(snapshot, target, self.height_policy)?;
        Ok(self.formula.combine(&terms))
    }
}
