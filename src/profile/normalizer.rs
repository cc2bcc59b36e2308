use log::trace;

use super::types::{HostProfile, Maxima, TaxonomyLevel};

/// Coerce a raw profile into range and into taxonomic nesting.
///
/// Only the first level found above its cap is clamped, checked from
/// species outward; a profile overflowing at several levels needs more than
/// one pass to come fully into range. Nesting is then repaired from classes
/// inward so every level holds at least as many taxa as the one it nests in.
pub fn normalize(profile: HostProfile, maxima: &Maxima) -> HostProfile {
    let mut profile = profile;

    if let Some(level) = TaxonomyLevel::ALL
        .into_iter()
        .find(|&level| profile.count(level) > maxima.get(level))
    {
        trace!(
            "Clamping {} {} to {}",
            profile.count(level),
            level.plural(),
            maxima.get(level)
        );
        profile = profile.with_count(level, maxima.get(level));
    }

    for inner in TaxonomyLevel::ALL.into_iter().rev() {
        let Some(outer) = inner.outer() else { continue };
        if profile.count(inner) < profile.count(outer) {
            trace!(
                "Raising {} {} to match {} {}",
                profile.count(inner),
                inner.plural(),
                profile.count(outer),
                outer.plural()
            );
            profile = profile.with_count(inner, profile.count(outer));
        }
    }

    profile
}
