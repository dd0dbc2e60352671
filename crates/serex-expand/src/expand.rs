//! The series constructor.
//!
//! Expansion is two-pass: classify the whole expression first, then
//! build the series bottom-up. No partially built series ever escapes
//! on failure. The truncation order is passed down unchanged at every
//! level of the recursion.

use serex_core::arena::ExprArena;
use serex_core::expr::{functions, ExprNode};
use serex_core::handle::ExprHandle;
use serex_numbers::Rational;
use serex_series::TruncatedSeries;

use crate::classifier::FeasibilityChecker;
use crate::error::ExpandError;
use crate::registry::FunctionRegistry;
use crate::verdict::Feasibility;

/// Expands expressions into truncated power series.
#[derive(Debug)]
pub struct SeriesExpander<'a> {
    arena: &'a ExprArena,
    registry: &'a FunctionRegistry,
}

impl<'a> SeriesExpander<'a> {
    /// Creates an expander over the given arena and registry.
    #[must_use]
    pub fn new(arena: &'a ExprArena, registry: &'a FunctionRegistry) -> Self {
        Self { arena, registry }
    }

    /// Expands an expression about the origin to the given truncation
    /// order (the number of coefficients kept, degrees `0..order`).
    ///
    /// Every symbol leaf expands to the linear monomial `x`.
    ///
    /// # Errors
    ///
    /// [`ExpandError::Multivariate`] or
    /// [`ExpandError::UnsupportedFunction`] when classification fails;
    /// [`ExpandError::UnsupportedExponent`] for a power whose exponent
    /// is not a rational constant; [`ExpandError::Series`] when the
    /// series engine rejects an inversion, root, or composition.
    pub fn expand(
        &self,
        expr: ExprHandle,
        order: usize,
    ) -> Result<TruncatedSeries, ExpandError> {
        let checker = FeasibilityChecker::new(self.arena, self.registry);
        match checker.classify(expr) {
            Feasibility::Expandable => self.build(expr, order),
            Feasibility::MultivariateUnsupported => Err(ExpandError::Multivariate),
            Feasibility::FunctionUnsupported => {
                let name = self
                    .first_unregistered(expr)
                    .map_or("?", functions::name);
                Err(ExpandError::UnsupportedFunction(name.to_string()))
            }
        }
    }

    /// Builds the series for an expression already verified feasible.
    fn build(&self, expr: ExprHandle, order: usize) -> Result<TruncatedSeries, ExpandError> {
        match self.arena.get(expr) {
            ExprNode::Integer(n) => Ok(TruncatedSeries::constant(Rational::from(*n))),
            ExprNode::Rational(n, d) => {
                Ok(TruncatedSeries::constant(Rational::from_i64(*n, *d as i64)))
            }
            ExprNode::Symbol(_) => Ok(TruncatedSeries::variable(order)),

            ExprNode::Function { id, args } => {
                let inner = self.build(args[0], order)?;
                // Classification already guaranteed a registry hit.
                let op = self
                    .registry
                    .lookup(*id)
                    .expect("classified function has a registered operator");
                Ok(op(&inner, order)?)
            }

            ExprNode::Pow { base, exp } => {
                let (num, den) = self.rational_exponent(*exp)?;
                let base = self.build(*base, order)?;
                self.apply_exponent(&base, num, den, order)
            }

            ExprNode::Add(_) | ExprNode::Mul(_) => Err(ExpandError::Multivariate),
        }
    }

    /// Reads a power exponent as a rational `n/d` in lowest terms.
    fn rational_exponent(&self, exp: ExprHandle) -> Result<(i64, u64), ExpandError> {
        match self.arena.get(exp) {
            ExprNode::Integer(n) => Ok((*n, 1)),
            ExprNode::Rational(n, d) => Ok((*n, *d)),
            _ => Err(ExpandError::UnsupportedExponent),
        }
    }

    /// Raises a base series to the rational exponent `num/den`.
    ///
    /// Integer exponents use integer powers (inverting first when
    /// negative). Fractional exponents extract the den-th root, then
    /// proceed as in the integer case.
    fn apply_exponent(
        &self,
        base: &TruncatedSeries,
        num: i64,
        den: u64,
        order: usize,
    ) -> Result<TruncatedSeries, ExpandError> {
        if num == 0 {
            // x^0 = 1, whatever the base.
            return Ok(TruncatedSeries::one());
        }

        let root = if den == 1 {
            base.truncated(order)
        } else {
            base.nth_root(den, order)?
        };

        let magnitude = u32::try_from(num.unsigned_abs())
            .map_err(|_| ExpandError::UnsupportedExponent)?;

        if num > 0 {
            Ok(root.pow_int(magnitude, order))
        } else {
            Ok(root.inverse(order)?.pow_int(magnitude, order))
        }
    }

    /// Finds the first function on the chain with no registered
    /// operator, for error reporting.
    fn first_unregistered(&self, expr: ExprHandle) -> Option<u32> {
        match self.arena.get(expr) {
            ExprNode::Function { id, args } => {
                if !self.registry.contains(*id) {
                    Some(*id)
                } else if args.len() == 1 {
                    self.first_unregistered(args[0])
                } else {
                    None
                }
            }
            ExprNode::Pow { base, .. } => self.first_unregistered(*base),
            _ => None,
        }
    }
}
