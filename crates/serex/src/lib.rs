//! # Serex
//!
//! Truncated power series expansion of symbolic expressions, with
//! exact rational coefficients.
//!
//! Serex takes an expression built from rational constants, a single
//! free variable, unary elementary functions, and rational powers, and
//! expands it about the origin to a caller-specified truncation order.
//!
//! ## Quick Start
//!
//! ```
//! use serex::prelude::*;
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

pub use serex_core as core;
pub use serex_expand as expand;
pub use serex_numbers as numbers;
pub use serex_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use serex_core::arena::ExprArena;
    pub use serex_core::expr::{functions, ExprNode};
    pub use serex_core::handle::ExprHandle;
    pub use serex_expand::{
        classify, expand, expand_with, ExpandError, Feasibility, FunctionRegistry,
    };
    pub use serex_numbers::{Integer, Rational};
    pub use serex_series::{SeriesError, TruncatedSeries};
}
