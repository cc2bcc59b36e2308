use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecificityError};

/// The five fixed taxonomic ranks, innermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaxonomyLevel {
    Species,
    Genus,
    Family,
    Order,
    Class,
}

impl TaxonomyLevel {
    pub const ALL: [TaxonomyLevel; 5] = [
        TaxonomyLevel::Species,
        TaxonomyLevel::Genus,
        TaxonomyLevel::Family,
        TaxonomyLevel::Order,
        TaxonomyLevel::Class,
    ];

    /// The level this one nests inside, if any
    pub fn outer(self) -> Option<TaxonomyLevel> {
        match self {
            TaxonomyLevel::Species => Some(TaxonomyLevel::Genus),
            TaxonomyLevel::Genus => Some(TaxonomyLevel::Family),
            TaxonomyLevel::Family => Some(TaxonomyLevel::Order),
            TaxonomyLevel::Order => Some(TaxonomyLevel::Class),
            TaxonomyLevel::Class => None,
        }
    }

    /// Plural label used for counts ("genera", "families", ...)
    pub fn plural(self) -> &'static str {
        match self {
            TaxonomyLevel::Species => "species",
            TaxonomyLevel::Genus => "genera",
            TaxonomyLevel::Family => "families",
            TaxonomyLevel::Order => "orders",
            TaxonomyLevel::Class => "classes",
        }
    }
}

impl std::fmt::Display for TaxonomyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxonomyLevel::Species => write!(f, "species"),
            TaxonomyLevel::Genus => write!(f, "genus"),
            TaxonomyLevel::Family => write!(f, "family"),
            TaxonomyLevel::Order => write!(f, "order"),
            TaxonomyLevel::Class => write!(f, "class"),
        }
    }
}

/// Counts of distinct host taxa at each taxonomic level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostProfile {
    pub species: i64,
    pub genera: i64,
    pub families: i64,
    pub orders: i64,
    pub classes: i64,
}

impl HostProfile {
    pub const fn new(species: i64, genera: i64, families: i64, orders: i64, classes: i64) -> Self {
        HostProfile {
            species,
            genera,
            families,
            orders,
            classes,
        }
    }

    /// Count recorded at a single level
    pub fn count(&self, level: TaxonomyLevel) -> i64 {
        match level {
            TaxonomyLevel::Species => self.species,
            TaxonomyLevel::Genus => self.genera,
            TaxonomyLevel::Family => self.families,
            TaxonomyLevel::Order => self.orders,
            TaxonomyLevel::Class => self.classes,
        }
    }

    /// Copy of this profile with one level replaced
    pub fn with_count(mut self, level: TaxonomyLevel, count: i64) -> Self {
        match level {
            TaxonomyLevel::Species => self.species = count,
            TaxonomyLevel::Genus => self.genera = count,
            TaxonomyLevel::Family => self.families = count,
            TaxonomyLevel::Order => self.orders = count,
            TaxonomyLevel::Class => self.classes = count,
        }
        self
    }

    /// Outermost level spanning more than one taxon, or `None` when the
    /// hosts fall within a single genus.
    pub fn outermost_spread(&self) -> Option<TaxonomyLevel> {
        TaxonomyLevel::ALL[1..]
            .iter()
            .rev()
            .copied()
            .find(|&level| self.count(level) > 1)
    }

    /// Reject profiles whose raw counts break the taxonomic nesting, e.g.
    /// more genera than species. Checked innermost pair first.
    pub fn check_nesting(&self) -> Result<()> {
        for inner in TaxonomyLevel::ALL {
            let Some(outer) = inner.outer() else { break };
            if self.count(outer) > self.count(inner) {
                return Err(SpecificityError::NestingViolation {
                    inner,
                    inner_count: self.count(inner),
                    outer,
                    outer_count: self.count(outer),
                });
            }
        }
        Ok(())
    }
}

impl From<(i64, i64, i64, i64, i64)> for HostProfile {
    fn from((species, genera, families, orders, classes): (i64, i64, i64, i64, i64)) -> Self {
        HostProfile::new(species, genera, families, orders, classes)
    }
}

impl std::fmt::Display for HostProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.species, self.genera, self.families, self.orders, self.classes
        )
    }
}

/// Global cap on the count at each level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maxima {
    pub species: i64,
    pub genera: i64,
    pub families: i64,
    pub orders: i64,
    pub classes: i64,
}

impl Maxima {
    pub fn get(&self, level: TaxonomyLevel) -> i64 {
        match level {
            TaxonomyLevel::Species => self.species,
            TaxonomyLevel::Genus => self.genera,
            TaxonomyLevel::Family => self.families,
            TaxonomyLevel::Order => self.orders,
            TaxonomyLevel::Class => self.classes,
        }
    }

    /// Every level at its cap
    pub fn saturated(&self) -> HostProfile {
        HostProfile::new(
            self.species,
            self.genera,
            self.families,
            self.orders,
            self.classes,
        )
    }
}

impl Default for Maxima {
    fn default() -> Self {
        Maxima {
            species: 1000,
            genera: 500,
            families: 150,
            orders: 75,
            classes: 5,
        }
    }
}
