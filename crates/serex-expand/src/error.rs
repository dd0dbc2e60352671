//! Expansion failure taxonomy.

use serex_series::SeriesError;
use thiserror::Error;

/// Why a series expansion failed.
///
/// The first two variants mirror the classifier's infeasibility
/// verdicts; the rest arise during construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// A node on the expansion chain has more than one operand.
    #[error("expression is not a single-variable chain (multivariate or n-ary node)")]
    Multivariate,

    /// A unary function on the chain has no registered series operator.
    #[error("no series expansion registered for function `{0}`")]
    UnsupportedFunction(String),

    /// A power node's exponent is not a rational constant.
    #[error("power exponent is not a rational constant")]
    UnsupportedExponent,

    /// The series engine rejected an inversion, root, or composition.
    #[error(transparent)]
    Series(#[from] SeriesError),
}
