//! Expression node types.
//!
//! The node set mirrors what the series expander can see: exact numeric
//! leaves, opaque symbols, n-ary sums and products, powers, and named
//! function applications. Negation and division are expressed through
//! `Mul` and `Pow` with negative exponents.

use smallvec::SmallVec;

use crate::handle::ExprHandle;

/// Unique identifier for a symbol.
pub type SymbolId = u32;

/// Unique identifier for a function.
pub type FunctionId = u32;

/// An expression node stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprNode {
    // === Atoms ===
    /// A 64-bit integer literal.
    Integer(i64),

    /// A rational number (numerator, denominator).
    ///
    /// Invariant: denominator > 1, gcd(num, den) == 1. Integral values
    /// are stored as `Integer`.
    Rational(i64, u64),

    /// A symbolic variable.
    Symbol(SymbolId),

    // === Compound Expressions ===
    /// Sum of expressions: a + b + c + ...
    ///
    /// Invariant: at least 2 arguments.
    Add(SmallVec<[ExprHandle; 4]>),

    /// Product of expressions: a * b * c * ...
    ///
    /// Invariant: at least 2 arguments.
    Mul(SmallVec<[ExprHandle; 4]>),

    /// Power expression: base^exp.
    Pow {
        /// The base of the power.
        base: ExprHandle,
        /// The exponent.
        exp: ExprHandle,
    },

    /// A function application: f(arg1, arg2, ...).
    Function {
        /// The function identifier.
        id: FunctionId,
        /// The arguments.
        args: SmallVec<[ExprHandle; 2]>,
    },
}

impl ExprNode {
    /// Returns true if this node is an atom (no children).
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            ExprNode::Integer(_) | ExprNode::Rational(_, _) | ExprNode::Symbol(_)
        )
    }

    /// Returns true if this node is a numeric literal.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, ExprNode::Integer(_) | ExprNode::Rational(_, _))
    }

    /// Returns the number of operands of this node.
    #[must_use]
    pub fn operand_count(&self) -> usize {
        match self {
            ExprNode::Integer(_) | ExprNode::Rational(_, _) | ExprNode::Symbol(_) => 0,
            ExprNode::Add(args) | ExprNode::Mul(args) => args.len(),
            ExprNode::Pow { .. } => 2,
            ExprNode::Function { args, .. } => args.len(),
        }
    }

    /// Returns the children of this node.
    #[must_use]
    pub fn children(&self) -> SmallVec<[ExprHandle; 4]> {
        match self {
            ExprNode::Integer(_) | ExprNode::Rational(_, _) | ExprNode::Symbol(_) => {
                SmallVec::new()
            }
            ExprNode::Add(args) | ExprNode::Mul(args) => args.clone(),
            ExprNode::Pow { base, exp } => smallvec::smallvec![*base, *exp],
            ExprNode::Function { args, .. } => args.iter().copied().collect(),
        }
    }
}

/// Standard function identifiers.
///
/// Identities listed under "no registered series" exist so expressions can
/// mention them; the expander reports them as unsupported.
pub mod functions {
    use super::FunctionId;

    /// Sine function.
    pub const SIN: FunctionId = 0;
    /// Cosine function.
    pub const COS: FunctionId = 1;
    /// Tangent function.
    pub const TAN: FunctionId = 2;
    /// Natural exponential.
    pub const EXP: FunctionId = 3;
    /// Natural logarithm.
    pub const LOG: FunctionId = 4;
    /// Inverse sine.
    pub const ASIN: FunctionId = 5;
    /// Inverse tangent.
    pub const ATAN: FunctionId = 6;
    /// Hyperbolic sine.
    pub const SINH: FunctionId = 7;
    /// Hyperbolic cosine.
    pub const COSH: FunctionId = 8;
    /// Hyperbolic tangent.
    pub const TANH: FunctionId = 9;
    /// Inverse hyperbolic sine.
    pub const ASINH: FunctionId = 10;
    /// Inverse hyperbolic tangent.
    pub const ATANH: FunctionId = 11;

    // No registered series:

    /// Square root. Expressed as `Pow` with exponent 1/2 when expandable.
    pub const SQRT: FunctionId = 12;
    /// Absolute value.
    pub const ABS: FunctionId = 13;

    /// Returns the display name of a function identifier.
    #[must_use]
    pub fn name(id: FunctionId) -> &'static str {
        match id {
            SIN => "sin",
            COS => "cos",
            TAN => "tan",
            EXP => "exp",
            LOG => "log",
            ASIN => "asin",
            ATAN => "atan",
            SINH => "sinh",
            COSH => "cosh",
            TANH => "tanh",
            ASINH => "asinh",
            ATANH => "atanh",
            SQRT => "sqrt",
            ABS => "abs",
            _ => "?",
        }
    }
}
