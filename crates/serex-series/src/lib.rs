//! # serex-series
//!
//! Truncated power series with exact rational coefficients.
//!
//! This crate provides:
//! - [`TruncatedSeries`]: dense coefficients for degrees below a truncation
//!   order, with the order threaded through every operation rather than
//!   stored in the value
//! - Multiplication, integer powers, reciprocals, d-th roots, and formal
//!   composition, all modulo `x^order`
//! - Exact Taylor coefficient tables for the elementary functions
//!
//! # Key algorithms
//!
//! - Reciprocal: triangular recurrence on coefficients
//! - Composition: Horner's rule over the outer coefficients
//! - d-th root: generalized binomial series composed with (f - 1)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod functions;
pub mod series;

pub use series::{SeriesError, TruncatedSeries};
