use serde::{Deserialize, Serialize};

use crate::profile::HostProfile;

/// Rank and its base-10 index for one host profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Specificity {
    pub rank: i64,
    pub index: f64,
}

/// A scored profile, in the record shape used for JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificityResult {
    #[serde(flatten)]
    pub profile: HostProfile,
    pub host_rank: i64,
    pub host_index: f64,
}

impl SpecificityResult {
    pub fn new(profile: HostProfile, specificity: Specificity) -> Self {
        SpecificityResult {
            profile,
            host_rank: specificity.rank,
            host_index: specificity.index,
        }
    }
}
