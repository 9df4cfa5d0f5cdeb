use serde::{Deserialize, Serialize};

use crate::state::SimSnapshot;

/// Which readings make up one stacked sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObservationLayout {
    /// Pose, linear velocity and angular velocity (12 values)
    #[default]
    Full,
    /// Pose only (6 values)
    PoseOnly,
}

impl ObservationLayout {
    pub fn sample_size(&self) -> usize {
        match self {
            ObservationLayout::Full => 12,
            ObservationLayout::PoseOnly => 6,
        }
    }

    pub fn extend_with(&self, values: &mut Vec<f64>, snapshot: &SimSnapshot) {
        match self {
            ObservationLayout::Full => values.extend_from_slice(&snapshot.kinematic_sample()),
            ObservationLayout::PoseOnly => values.extend_from_slice(&snapshot.pose.to_array()),
        }
    }
}

/// Consecutive samples stacked in timestep order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawObservation")]
pub struct Observation {
    values: Vec<f64>,
    layout: ObservationLayout,
}

#[derive(Deserialize)]
struct RawObservation {
    values: Vec<f64>,
    layout: ObservationLayout,
}

impl TryFrom<RawObservation> for Observation {
    type Error = String;

    fn try_from(raw: RawObservation) -> Result<Self, Self::Error> {
        let sample_size = raw.layout.sample_size();
        if raw.values.len() % sample_size != 0 {
            return Err(format!(
                "{} values do not split into {:?} samples of {}",
                raw.values.len(),
                raw.layout,
                sample_size
            ));
        }

        Ok(Self {
            values: raw.values,
            layout: raw.layout,
        })
    }
}

impl Observation {
    pub fn with_capacity(layout: ObservationLayout, samples: usize) -> Self {
        Self {
            values: Vec::with_capacity(layout.sample_size() * samples),
            layout,
        }
    }

    /// Stack the same snapshot `samples` times
    pub fn repeated(layout: ObservationLayout, snapshot: &SimSnapshot, samples: usize) -> Self {
        let mut observation = Self::with_capacity(layout, samples);
        for _ in 0..samples {
            observation.push(snapshot);
        }
        observation
    }

    pub fn push(&mut self, snapshot: &SimSnapshot) {
        self.layout.extend_with(&mut self.values, snapshot);
    }

    pub fn layout(&self) -> ObservationLayout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Per-timestep samples in stacking order
    pub fn samples(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.layout.sample_size())
    }
}

impl AsRef<[f64]> for Observation {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Pose;
    use nalgebra::Vector3;

    fn snapshot() -> SimSnapshot {
        SimSnapshot {
            pose: Pose::from_slice(&[1.0, 2.0, 3.0, 0.0, 0.1, 0.0]),
            velocity: Vector3::new(0.0, 0.0, 1.5),
            angular_velocity: Vector3::new(0.2, 0.0, 0.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_repeated_full() {
        let observation = Observation::repeated(ObservationLayout::Full, &snapshot(), 3);

        assert_eq!(observation.len(), 36);
        let samples: Vec<&[f64]> = observation.samples().collect();
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|s| *s == samples[0]));
        assert_eq!(samples[0], &snapshot().kinematic_sample()[..]);
    }

    #[test]
    fn test_pose_only() {
        let observation = Observation::repeated(ObservationLayout::PoseOnly, &snapshot(), 2);

        assert_eq!(observation.len(), 12);
        assert_eq!(
            observation.into_vec(),
            vec![1.0, 2.0, 3.0, 0.0, 0.1, 0.0, 1.0, 2.0, 3.0, 0.0, 0.1, 0.0]
        );
    }

    #[test]
    fn test_push_keeps_order() {
        let mut later = snapshot();
        later.pose.position.z = 4.0;

        let mut observation = Observation::with_capacity(ObservationLayout::Full, 2);
        observation.push(&snapshot());
        observation.push(&later);

        let altitudes: Vec<f64> = observation.samples().map(|s| s[2]).collect();
        assert_eq!(altitudes, vec![3.0, 4.0]);
    }

    #[test]
    fn test_deserialize_whole_samples() {
        let observation = Observation::repeated(ObservationLayout::Full, &snapshot(), 2);

        let serialized = serde_json::to_string(&observation).unwrap();
        let deserialized: Observation = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, observation);
    }

    #[test]
    fn test_deserialize_rejects_partial_sample() {
        let json = r#"{ "values": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], "layout": "PoseOnly" }"#;

        assert!(serde_json::from_str::<Observation>(json).is_err());
    }
}
