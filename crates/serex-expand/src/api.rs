//! Convenience entry points using the process-wide built-in registry.

use serex_core::arena::ExprArena;
use serex_core::handle::ExprHandle;
use serex_series::TruncatedSeries;

use crate::classifier::FeasibilityChecker;
use crate::error::ExpandError;
use crate::expand::SeriesExpander;
use crate::registry::{builtin_registry, FunctionRegistry};
use crate::verdict::Feasibility;

/// Expands an expression with the built-in function registry.
///
/// # Errors
///
/// See [`SeriesExpander::expand`].
pub fn expand(
    arena: &ExprArena,
    expr: ExprHandle,
    order: usize,
) -> Result<TruncatedSeries, ExpandError> {
    expand_with(arena, expr, order, builtin_registry())
}

/// Expands an expression with a caller-supplied registry.
///
/// # Errors
///
/// See [`SeriesExpander::expand`].
pub fn expand_with(
    arena: &ExprArena,
    expr: ExprHandle,
    order: usize,
    registry: &FunctionRegistry,
) -> Result<TruncatedSeries, ExpandError> {
    SeriesExpander::new(arena, registry).expand(expr, order)
}

/// Classifies an expression with the built-in function registry.
#[must_use]
pub fn classify(arena: &ExprArena, expr: ExprHandle) -> Feasibility {
    FeasibilityChecker::new(arena, builtin_registry()).classify(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serex_core::expr::functions;
    use serex_numbers::Rational;

    #[test]
    fn test_expand_uses_builtin_registry() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let sin_x = arena.unary(functions::SIN, x);

        let s = expand(&arena, sin_x, 4).unwrap();
        assert_eq!(s.coeff(1), Rational::from(1));
        assert_eq!(classify(&arena, sin_x), Feasibility::Expandable);
    }

    #[test]
    fn test_expand_with_custom_registry() {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let sin_x = arena.unary(functions::SIN, x);

        let empty = FunctionRegistry::empty();
        assert_eq!(
            expand_with(&arena, sin_x, 4, &empty),
            Err(ExpandError::UnsupportedFunction("sin".to_string()))
        );
    }
}
