#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_blocks_identical, assert_observation_finite};

pub use fixtures::*;
