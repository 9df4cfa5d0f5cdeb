mod components;
mod physics;

// Re-export test fixtures
pub use components::*;
pub use physics::*;
