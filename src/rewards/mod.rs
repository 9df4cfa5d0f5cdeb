mod error;
mod formula;
mod terms;

pub use error::RewardError;
pub use formula::{HeightPolicy, RewardFormula, RewardFunction};
pub use terms::ShapingTerms;
