pub(crate) mod types;
pub(crate) mod normalizer;

pub use types::{HostProfile, Maxima, TaxonomyLevel};
pub use normalizer::normalize;
