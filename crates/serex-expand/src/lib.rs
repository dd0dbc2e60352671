//! # serex-expand
//!
//! Converts a symbolic expression into its truncated power series
//! expansion about the origin, with exact rational coefficients.
//!
//! Expansion is a two-pass algorithm:
//!
//! 1. The [`FeasibilityChecker`] walks the single-operand chain of the
//!    expression (function operands and power bases) and decides
//!    whether a series can be built at all, without building one.
//! 2. The [`SeriesExpander`] dispatches on the node kind, recursing
//!    bottom-up and combining sub-series through the series engine:
//!    function composition via the [`FunctionRegistry`], and integer
//!    powers, inversions, and d-th roots for rational exponents.
//!
//! ```
//! use serex_core::arena::ExprArena;
//! use serex_core::expr::functions;
//! use serex_expand::expand;
//!
//! let mut arena = ExprArena::new();
//! let x = arena.symbol("x");
//! let sin_x = arena.unary(functions::SIN, x);
//!
//! let series = expand(&arena, sin_x, 6).unwrap();
//! assert_eq!(series.to_string(), "1*x + -1/6*x^3 + 1/120*x^5");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod classifier;
pub mod error;
pub mod expand;
pub mod registry;
pub mod verdict;

pub use api::{classify, expand, expand_with};
pub use classifier::FeasibilityChecker;
pub use error::ExpandError;
pub use expand::SeriesExpander;
pub use registry::{builtin_registry, FunctionRegistry, SeriesOp};
pub use verdict::Feasibility;
