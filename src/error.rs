use thiserror::Error;

use crate::profile::TaxonomyLevel;

#[derive(Debug, Error, PartialEq)]
pub enum SpecificityError {
    /// log10 is undefined for ranks at or below zero
    #[error("cannot derive an index from non-positive rank {0}")]
    NonPositiveRank(i64),

    #[error("{outer_count} host {} exceed {inner_count} host {}", .outer.plural(), .inner.plural())]
    NestingViolation {
        inner: TaxonomyLevel,
        inner_count: i64,
        outer: TaxonomyLevel,
        outer_count: i64,
    },

    #[error("line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SpecificityError>;
