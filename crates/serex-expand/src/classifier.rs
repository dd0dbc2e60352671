//! The feasibility classifier.
//!
//! A pure pre-pass over the expression tree that decides whether a
//! series can be built at all, without constructing any series. The
//! classifier walks the single-operand chain only: the operand of a
//! unary function, the base of a power. Anything with two or more
//! operands is rejected on sight, since recursing into an arbitrary
//! operand would silently produce a wrong answer.

use serex_core::arena::ExprArena;
use serex_core::expr::ExprNode;
use serex_core::handle::ExprHandle;

use crate::registry::FunctionRegistry;
use crate::verdict::Feasibility;

/// Classifies expressions against a fixed function registry.
#[derive(Debug)]
pub struct FeasibilityChecker<'a> {
    arena: &'a ExprArena,
    registry: &'a FunctionRegistry,
}

impl<'a> FeasibilityChecker<'a> {
    /// Creates a checker over the given arena and registry.
    #[must_use]
    pub fn new(arena: &'a ExprArena, registry: &'a FunctionRegistry) -> Self {
        Self { arena, registry }
    }

    /// Returns the feasibility verdict for an expression.
    #[must_use]
    pub fn classify(&self, expr: ExprHandle) -> Feasibility {
        match self.arena.get(expr) {
            ExprNode::Integer(_) | ExprNode::Rational(_, _) | ExprNode::Symbol(_) => {
                Feasibility::Expandable
            }

            // The exponent is validated at construction time; whether a
            // series exists depends on the base alone.
            ExprNode::Pow { base, .. } => self.classify(*base),

            ExprNode::Function { id, args } => {
                if args.len() != 1 {
                    return Feasibility::MultivariateUnsupported;
                }
                let own = if self.registry.contains(*id) {
                    Feasibility::Expandable
                } else {
                    Feasibility::FunctionUnsupported
                };
                own.worse(self.classify(args[0]))
            }

            ExprNode::Add(_) | ExprNode::Mul(_) => Feasibility::MultivariateUnsupported,
        }
    }
}
