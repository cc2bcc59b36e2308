pub(crate) mod cases;
pub(crate) mod report;

pub use cases::{ReferenceCase, REFERENCE_CASES};
pub use report::{relative_error, RegressionReport, RegressionRow, ACCEPTABLE_ERROR};
