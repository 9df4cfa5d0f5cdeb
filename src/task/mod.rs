mod action;
mod environment;
mod error;
mod observation;

pub use action::{Action, ActionSpace, ROTOR_COUNT};
pub use environment::{StepResult, Task, DEFAULT_ACTION_REPEAT, DEFAULT_TARGET};
pub use error::TaskError;
pub use observation::{Observation, ObservationLayout};
