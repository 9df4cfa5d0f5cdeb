use serde::{Deserialize, Serialize};

pub const ROTOR_COUNT: usize = 4;

/// Per-rotor speed commands
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    pub rotor_speeds: [f64; ROTOR_COUNT],
}

impl Action {
    pub fn new(rotor_speeds: [f64; ROTOR_COUNT]) -> Self {
        Self { rotor_speeds }
    }

    /// Same command on every rotor
    pub fn uniform(speed: f64) -> Self {
        Self {
            rotor_speeds: [speed; ROTOR_COUNT],
        }
    }
}

impl From<[f64; ROTOR_COUNT]> for Action {
    fn from(rotor_speeds: [f64; ROTOR_COUNT]) -> Self {
        Self { rotor_speeds }
    }
}

/// Bounds an agent is expected to respect. The task itself never clamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionSpace {
    pub low: f64,
    pub high: f64,
    pub size: usize,
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 900.0,
            size: ROTOR_COUNT,
        }
    }
}

impl ActionSpace {
    pub fn contains(&self, action: &Action) -> bool {
        action
            .rotor_speeds
            .iter()
            .all(|speed| (self.low..=self.high).contains(speed))
    }
}
