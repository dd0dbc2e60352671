//! The function registry: series composition operators keyed by
//! function identity.
//!
//! Each operator takes an already-expanded argument series and the
//! truncation order, and returns the composed series. The operators do
//! not re-validate their argument's provenance; they fail through the
//! series engine when the composition is not algebraically defined
//! (for instance `log` of a series whose constant term is not 1).

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use serex_core::expr::{functions, FunctionId};
use serex_series::functions as tables;
use serex_series::{SeriesError, TruncatedSeries};

/// A series composition operator for one elementary function.
pub type SeriesOp = fn(&TruncatedSeries, usize) -> Result<TruncatedSeries, SeriesError>;

/// Maps function identities to their series composition operators.
///
/// Immutable after construction; lookups are plain reads.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    ops: FxHashMap<FunctionId, SeriesOp>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry with all built-in elementary functions.
    #[must_use]
    pub fn builtin() -> Self {
        let mut reg = Self::empty();
        reg.register(functions::SIN, sin_op);
        reg.register(functions::COS, cos_op);
        reg.register(functions::TAN, tan_op);
        reg.register(functions::EXP, exp_op);
        reg.register(functions::LOG, log_op);
        reg.register(functions::ASIN, asin_op);
        reg.register(functions::ATAN, atan_op);
        reg.register(functions::SINH, sinh_op);
        reg.register(functions::COSH, cosh_op);
        reg.register(functions::TANH, tanh_op);
        reg.register(functions::ASINH, asinh_op);
        reg.register(functions::ATANH, atanh_op);
        reg
    }

    /// Registers an operator for a function identity, replacing any
    /// existing entry.
    pub fn register(&mut self, id: FunctionId, op: SeriesOp) {
        self.ops.insert(id, op);
    }

    /// Looks up the operator for a function identity.
    #[must_use]
    pub fn lookup(&self, id: FunctionId) -> Option<SeriesOp> {
        self.ops.get(&id).copied()
    }

    /// Returns true if the identity has a registered operator.
    #[must_use]
    pub fn contains(&self, id: FunctionId) -> bool {
        self.ops.contains_key(&id)
    }

    /// Returns the number of registered operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if no operators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Returns the process-wide built-in registry, building it on first use.
#[must_use]
pub fn builtin_registry() -> &'static FunctionRegistry {
    static REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();
    REGISTRY.get_or_init(FunctionRegistry::builtin)
}

fn sin_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::sin(order).compose(inner, order)
}

fn cos_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::cos(order).compose(inner, order)
}

fn tan_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::tan(order).compose(inner, order)
}

fn exp_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::exp(order).compose(inner, order)
}

/// `log(f)` as `log(1 + u)` with `u = f - 1`; requires `f(0) = 1`.
fn log_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    let shifted = inner.sub(&TruncatedSeries::one());
    tables::log1p(order).compose(&shifted, order)
}

fn asin_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::asin(order).compose(inner, order)
}

fn atan_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::atan(order).compose(inner, order)
}

fn sinh_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::sinh(order).compose(inner, order)
}

fn cosh_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::cosh(order).compose(inner, order)
}

fn tanh_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::tanh(order).compose(inner, order)
}

fn asinh_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::asinh(order).compose(inner, order)
}

fn atanh_op(inner: &TruncatedSeries, order: usize) -> Result<TruncatedSeries, SeriesError> {
    tables::atanh(order).compose(inner, order)
}
