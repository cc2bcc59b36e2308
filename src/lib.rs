//! Host specificity rank and index.
//!
//! A parasite's host range is summarised as the number of host species,
//! genera, families, orders and classes it is recorded from. The rank counts
//! how many nested host profiles are no more diverse than that one; the index
//! is its base-10 logarithm.

pub mod error;
pub mod io;
pub mod profile;
pub mod rank;
pub mod reference;

pub use error::SpecificityError;
pub use profile::{normalize, HostProfile, Maxima, TaxonomyLevel};
pub use rank::{host_index, RankCalculator, Specificity, SpecificityResult};
