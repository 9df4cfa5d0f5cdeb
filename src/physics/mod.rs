mod error;
mod traits;

pub use error::SimulatorError;
pub use traits::{InitialConditions, Simulator, StepOutcome, DEFAULT_RUNTIME};
