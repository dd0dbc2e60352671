//! Feasibility verdicts.
//!
//! Classification answers "can this expression be expanded at all?"
//! before any series is built. Verdicts form a totally ordered badness
//! lattice; combining two verdicts keeps the worse one.

/// The outcome of classifying an expression for series expansion.
///
/// The derived `Ord` is the badness order: [`Feasibility::Expandable`]
/// is best, [`Feasibility::FunctionUnsupported`] is worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feasibility {
    /// The expression can be expanded.
    Expandable,
    /// The expression has a node with more than one operand (sum,
    /// product, multi-argument function) on the relevant chain.
    MultivariateUnsupported,
    /// A unary function on the chain has no registered series operator.
    FunctionUnsupported,
}

impl Feasibility {
    /// Combines two verdicts, keeping the worse of the two.
    #[must_use]
    pub fn worse(self, other: Self) -> Self {
        self.max(other)
    }

    /// Returns true if expansion can proceed.
    #[must_use]
    pub fn is_expandable(self) -> bool {
        self == Feasibility::Expandable
    }
}
