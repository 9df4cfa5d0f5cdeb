mod spatial;

pub use spatial::{Pose, SimSnapshot};
