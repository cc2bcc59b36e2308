use log::debug;

use super::types::Specificity;
use crate::error::{Result, SpecificityError};
use crate::profile::{normalize, HostProfile, Maxima, TaxonomyLevel};

/// Ranks host profiles against a fixed set of per-level maxima.
///
/// The rank of a profile counts the nested profiles that are no more
/// diverse than it, ordered outermost level first. Nothing is cached; every
/// call recomputes from scratch.
#[derive(Debug, Clone, Default)]
pub struct RankCalculator {
    maxima: Maxima,
}

impl RankCalculator {
    pub fn new(maxima: Maxima) -> Self {
        RankCalculator { maxima }
    }

    pub fn maxima(&self) -> &Maxima {
        &self.maxima
    }

    /// Integer rank of a profile. Raw counts are normalized first, on this
    /// and on every recursive call. Ranks beyond the `i64` range saturate.
    pub fn rank(&self, profile: HostProfile) -> i64 {
        let rank = self.rank_wide(profile);
        i64::try_from(rank).unwrap_or(if rank < 0 { i64::MIN } else { i64::MAX })
    }

    // A count left above its cap by the single clamp pass can push the closed
    // form past i64, so the recursion runs in i128.
    fn rank_wide(&self, profile: HostProfile) -> i128 {
        let profile = normalize(profile, &self.maxima);

        match profile.outermost_spread() {
            Some(level @ (TaxonomyLevel::Class | TaxonomyLevel::Order | TaxonomyLevel::Family)) => {
                self.telescope(profile, level)
            }
            Some(TaxonomyLevel::Genus) => self.spread_over_genera(profile),
            Some(TaxonomyLevel::Species) | None => profile.species as i128,
        }
    }

    /// Rank plus its base-10 index
    pub fn score(&self, profile: HostProfile) -> Result<Specificity> {
        let rank = self.rank(profile);
        let index = host_index(rank)?;
        debug!("Scored {}: rank {} index {:.4}", profile, rank, index);
        Ok(Specificity { rank, index })
    }

    /// Split a profile spread across several taxa at `level` into:
    /// everything ranked below it (one fewer taxon at `level`, every inner
    /// level saturated), plus its offset within a single taxon at `level`.
    fn telescope(&self, profile: HostProfile, level: TaxonomyLevel) -> i128 {
        let count = profile.count(level);

        let looser = collapse_outward(self.maxima.saturated(), level).with_count(level, count - 1);
        let restricted = collapse_outward(profile, level);
        let pure = collapse_outward(HostProfile::new(count, count, count, count, count), level);

        self.rank_wide(looser)
            .saturating_add(self.rank_wide(restricted))
            .saturating_sub(self.rank_wide(pure))
            .saturating_add(1)
    }

    /// Closed form for hosts spread over several genera of one family: every
    /// species budget reachable under the preceding genera, then the offset
    /// within the current one.
    fn spread_over_genera(&self, profile: HostProfile) -> i128 {
        let species = profile.species as i128;
        let genera = profile.genera as i128;
        let preceding = genera - 1;
        // sum of (max_species - g + 1) for g in 1..genera
        let below = preceding * (self.maxima.species as i128 + 1) - preceding * genera / 2;
        below + species - genera + 1
    }
}

/// Copy of `profile` with `level` and every level outside it set to one
fn collapse_outward(profile: HostProfile, level: TaxonomyLevel) -> HostProfile {
    TaxonomyLevel::ALL
        .into_iter()
        .filter(|&other| other >= level)
        .fold(profile, |profile, other| profile.with_count(other, 1))
}

/// Base-10 logarithm of a rank
pub fn host_index(rank: i64) -> Result<f64> {
    if rank <= 0 {
        return Err(SpecificityError::NonPositiveRank(rank));
    }
    Ok((rank as f64).log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn rank(counts: (i64, i64, i64, i64, i64)) -> i64 {
        RankCalculator::default().rank(counts.into())
    }

    fn small_maxima() -> Maxima {
        Maxima {
            species: 20,
            genera: 10,
            families: 6,
            orders: 4,
            classes: 3,
        }
    }

    /// Every in-range profile obeying the nesting order
    fn nested_profiles(maxima: &Maxima) -> Vec<HostProfile> {
        let mut profiles = Vec::new();
        for classes in 1..=maxima.classes {
            for orders in classes..=maxima.orders {
                for families in orders..=maxima.families {
                    for genera in families..=maxima.genera {
                        for species in genera..=maxima.species {
                            profiles.push(HostProfile::new(species, genera, families, orders, classes));
                        }
                    }
                }
            }
        }
        profiles
    }

    #[test]
    fn test_base_case() {
        assert_eq!(rank((1, 1, 1, 1, 1)), 1);
    }

    #[test]
    fn test_species_only_growth() {
        for species in 1..=1000 {
            assert_eq!(rank((species, 1, 1, 1, 1)), species);
        }
    }

    #[test]
    fn test_clamp_to_max() {
        assert_eq!(rank((2000, 1, 1, 1, 1)), rank((1000, 1, 1, 1, 1)));
        assert_eq!(rank((2000, 1, 1, 1, 1)), 1000);
    }

    #[test]
    fn test_nesting_repair() {
        assert_eq!(rank((1, 5, 1, 1, 1)), rank((5, 5, 1, 1, 1)));
        assert_eq!(rank((1, 5, 1, 1, 1)), 3995);
    }

    #[test]
    fn test_genera_closed_form_matches_sum() {
        let calculator = RankCalculator::default();
        for genera in 1..=500 {
            for species in [genera, genera + 7, 1000] {
                let expected: i64 = (1..genera).map(|g| 1000 - g + 1).sum::<i64>() + species - genera + 1;
                assert_eq!(
                    calculator.rank(HostProfile::new(species, genera, 1, 1, 1)),
                    expected,
                    "species {} genera {}",
                    species,
                    genera
                );
            }
        }
    }

    #[test]
    fn test_known_ranks() {
        assert_eq!(rank((55, 11, 1, 1, 1)), 10_000);
        assert_eq!(rank((1, 1, 2, 1, 1)), 375_251);
        assert_eq!(rank((1, 1, 1, 2, 1)), 45_663_801);
        assert_eq!(rank((1, 1, 1, 1, 2)), 2_449_775_801);
        assert_eq!(rank((4, 4, 4, 3, 1)), 91_325_602);
        assert_eq!(rank((573, 120, 38, 16, 5)), 10_000_000_000);
        assert_eq!(rank((1000, 500, 150, 75, 5)), 11_795_988_501);
    }

    #[test]
    fn test_small_maxima_enumerate_every_profile() {
        let calculator = RankCalculator::new(small_maxima());
        let profiles = nested_profiles(calculator.maxima());
        assert_eq!(profiles.len(), 3452);

        let ranks: HashSet<i64> = profiles.iter().map(|&p| calculator.rank(p)).collect();
        let expected: HashSet<i64> = (1..=profiles.len() as i64).collect();
        assert_eq!(ranks, expected);
        assert_eq!(calculator.rank(small_maxima().saturated()), 3452);
    }

    #[test]
    fn test_monotonic_in_each_level() {
        let maxima = small_maxima();
        let calculator = RankCalculator::new(maxima);
        let valid: HashSet<HostProfile> = nested_profiles(&maxima).into_iter().collect();

        for &profile in &valid {
            for level in TaxonomyLevel::ALL {
                let grown = profile.with_count(level, profile.count(level) + 1);
                if valid.contains(&grown) {
                    assert!(
                        calculator.rank(grown) >= calculator.rank(profile),
                        "rank fell from {} to {}",
                        profile,
                        grown
                    );
                }
            }
        }
    }

    #[test]
    fn test_score_derives_index() {
        let specificity = RankCalculator::default()
            .score(HostProfile::new(55, 11, 1, 1, 1))
            .unwrap();
        assert_eq!(specificity.rank, 10_000);
        assert_abs_diff_eq!(specificity.index, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_counts_do_not_panic() {
        let calculator = RankCalculator::default();
        assert_eq!(calculator.rank(HostProfile::new(0, 0, 0, 0, 0)), 0);
        assert_eq!(
            calculator.score(HostProfile::new(-3, -3, -3, -3, -3)),
            Err(SpecificityError::NonPositiveRank(-3))
        );
    }

    #[test]
    fn test_uncapped_genera_saturates() {
        // species takes the single clamp, so genera keeps its raw count
        let calculator = RankCalculator::default();
        let profile = HostProfile::new(2000, 5_000_000_000, 1, 1, 1);
        assert_eq!(calculator.rank(profile), i64::MIN);
        assert_eq!(
            calculator.score(profile),
            Err(SpecificityError::NonPositiveRank(i64::MIN))
        );
    }

    #[test]
    fn test_huge_species_maximum_saturates() {
        let calculator = RankCalculator::new(Maxima {
            species: i64::MAX,
            ..Maxima::default()
        });
        assert_eq!(calculator.rank(HostProfile::new(10, 3, 1, 1, 1)), i64::MAX);
        assert_eq!(calculator.rank(HostProfile::new(10, 1, 1, 1, 1)), 10);
    }

    #[test]
    fn test_host_index() {
        assert_abs_diff_eq!(host_index(1).unwrap(), 0.0);
        assert_abs_diff_eq!(host_index(1000).unwrap(), 3.0, epsilon = 1e-12);
        assert_eq!(host_index(0), Err(SpecificityError::NonPositiveRank(0)));
    }
}
