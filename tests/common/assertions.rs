use quadtask::Observation;

/// Assert every stacked sample in an observation is the same reading
#[track_caller]
pub fn assert_blocks_identical(observation: &Observation) {
    let mut samples = observation.samples();
    let first = samples.next().expect("Observation has no samples");

    for (i, sample) in samples.enumerate() {
        assert_eq!(sample, first, "Sample {} differs from the first", i + 1);
    }
}

/// Assert an observation holds only finite readings
#[track_caller]
pub fn assert_observation_finite(observation: &Observation) {
    for (i, value) in observation.as_slice().iter().enumerate() {
        assert!(value.is_finite(), "Observation value {} is not finite", i);
    }
}
