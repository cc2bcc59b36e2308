pub(crate) mod types;
pub(crate) mod calculator;

pub use types::{Specificity, SpecificityResult};
pub use calculator::{host_index, RankCalculator};
