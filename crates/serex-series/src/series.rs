//! The truncated power series value type and its arithmetic.
//!
//! A series holds dense rational coefficients for degrees `0..n`. The
//! truncation order is a parameter of every operation that can grow or
//! mix degrees; it is never stored in the value itself. Coefficients past
//! the stored length read as zero, and trailing zeros do not affect
//! equality.

use num_traits::{One, Zero};
use serex_numbers::Rational;
use std::fmt;
use thiserror::Error;

/// Errors from series operations whose result is undefined for the given
/// constant term.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// Multiplicative inversion of a series with zero constant term.
    #[error("series is not invertible: constant term is zero")]
    NonInvertible,

    /// Root extraction from a series whose constant term is not 1.
    #[error("series has no exact degree-{degree} root: constant term must be 1")]
    NoRoot {
        /// The requested root degree d.
        degree: u64,
    },

    /// Composition with an inner series whose constant term is non-zero.
    #[error("series composition requires an inner series with zero constant term")]
    NonzeroConstantTerm,
}

/// A formal power series truncated at a fixed order.
#[derive(Clone, Debug, Default)]
pub struct TruncatedSeries {
    /// Coefficients by degree, starting at degree 0.
    coeffs: Vec<Rational>,
}

impl TruncatedSeries {
    /// Creates a series from explicit coefficients (degree 0 first).
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<Rational>) -> Self {
        Self { coeffs }
    }

    /// Creates the zero series.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant series `c`.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self { coeffs: vec![c] }
        }
    }

    /// Creates the constant series `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Rational::one())
    }

    /// Creates the linear monomial `x` (constant 0, linear coefficient 1).
    ///
    /// At order 1 even the linear term is truncated away and the result
    /// is the zero series.
    #[must_use]
    pub fn variable(order: usize) -> Self {
        if order < 2 {
            return Self::zero();
        }
        Self {
            coeffs: vec![Rational::zero(), Rational::one()],
        }
    }

    /// Returns the coefficient of `x^n`.
    #[must_use]
    pub fn coeff(&self, n: usize) -> Rational {
        self.coeffs.get(n).cloned().unwrap_or_else(Rational::zero)
    }

    /// Returns the constant term (coefficient of `x^0`).
    #[must_use]
    pub fn constant_term(&self) -> Rational {
        self.coeff(0)
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if every stored coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Iterates over `(degree, coefficient)` pairs of stored terms.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &Rational)> {
        self.coeffs.iter().enumerate()
    }

    /// Drops coefficients of degree `order` and above.
    #[must_use]
    pub fn truncated(&self, order: usize) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.truncate(order);
        Self { coeffs }
    }

    /// Adds two series.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.len().max(other.len());
        let coeffs = (0..len).map(|n| self.coeff(n) + other.coeff(n)).collect();
        Self { coeffs }
    }

    /// Subtracts two series.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.len().max(other.len());
        let coeffs = (0..len).map(|n| self.coeff(n) - other.coeff(n)).collect();
        Self { coeffs }
    }

    /// Scales every coefficient by a constant.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        let coeffs = self.coeffs.iter().map(|a| a * c).collect();
        Self { coeffs }
    }

    /// Multiplies two series modulo `x^order` (truncated Cauchy product).
    #[must_use]
    pub fn mul(&self, other: &Self, order: usize) -> Self {
        let len = order.min(self.len() + other.len());
        let mut coeffs = vec![Rational::zero(); len];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() || i >= len {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                if i + j >= len {
                    break;
                }
                coeffs[i + j] = coeffs[i + j].clone() + a * b;
            }
        }

        Self { coeffs }
    }

    /// Raises the series to a non-negative integer power modulo `x^order`.
    ///
    /// Binary exponentiation with truncated products.
    #[must_use]
    pub fn pow_int(&self, n: u32, order: usize) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.truncated(order);
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base, order);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base, order);
            }
        }

        result
    }

    /// Computes the multiplicative inverse modulo `x^order`.
    ///
    /// Uses the triangular recurrence: with `f * h = 1`,
    /// `h_n = -(1/f_0) * Σᵢ₌₁ⁿ f_i h_{n-i}`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NonInvertible`] if the constant term is zero.
    pub fn inverse(&self, order: usize) -> Result<Self, SeriesError> {
        let f0 = self.constant_term();
        if f0.is_zero() {
            return Err(SeriesError::NonInvertible);
        }

        let f0_inv = f0.recip();
        let mut coeffs = Vec::with_capacity(order);

        for n in 0..order {
            if n == 0 {
                coeffs.push(f0_inv.clone());
                continue;
            }

            let mut sum = Rational::zero();
            for i in 1..=n {
                let f_i = self.coeff(i);
                if !f_i.is_zero() {
                    sum = sum + f_i * &coeffs[n - i];
                }
            }
            coeffs.push(-(f0_inv.clone() * sum));
        }

        Ok(Self { coeffs })
    }

    /// Computes the d-th root with constant term 1, modulo `x^order`.
    ///
    /// The result is the unique series `R` with `R(0) = 1` and
    /// `R^d ≈ self (mod x^order)`. Computed as the generalized binomial
    /// series `(1 + u)^(1/d)` with `u = self - 1`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NoRoot`] unless the constant term is exactly 1.
    pub fn nth_root(&self, degree: u64, order: usize) -> Result<Self, SeriesError> {
        if degree == 1 {
            return Ok(self.truncated(order));
        }
        if !self.constant_term().is_one() {
            return Err(SeriesError::NoRoot { degree });
        }

        let exponent = Rational::from_i64(1, degree as i64);
        let u = self.sub(&Self::one());
        binomial_series(&exponent, order).compose(&u, order)
    }

    /// Composes `self(inner)` modulo `x^order` by Horner's rule.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NonzeroConstantTerm`] if the inner series has a
    /// non-zero constant term (the substitution is only a well-defined
    /// formal operation when the inner series vanishes at the origin).
    pub fn compose(&self, inner: &Self, order: usize) -> Result<Self, SeriesError> {
        if !inner.constant_term().is_zero() {
            return Err(SeriesError::NonzeroConstantTerm);
        }

        let outer = self.truncated(order);
        let mut result = Self::zero();

        for k in (0..outer.len()).rev() {
            result = result.mul(inner, order);
            let c = outer.coeff(k);
            if !c.is_zero() {
                result = result.add(&Self::constant(c));
            }
        }

        Ok(result)
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(n, c)| c * &Rational::from(n as i64))
            .collect();
        Self { coeffs }
    }

    /// Computes the formal integral (constant of integration 0),
    /// truncated at `order`.
    #[must_use]
    pub fn integral(&self, order: usize) -> Self {
        let mut coeffs = vec![Rational::zero()];
        for (n, c) in self.coeffs.iter().enumerate() {
            if n + 1 >= order {
                break;
            }
            coeffs.push(c / &Rational::from(n as i64 + 1));
        }
        Self { coeffs }
    }
}

/// The generalized binomial series `(1 + x)^e` to the given order.
///
/// Coefficients follow `c_0 = 1`, `c_k = c_{k-1} * (e - k + 1) / k`.
#[must_use]
pub fn binomial_series(exponent: &Rational, order: usize) -> TruncatedSeries {
    let mut coeffs = Vec::with_capacity(order);
    let mut c = Rational::one();

    for k in 0..order {
        if k > 0 {
            let factor = exponent.clone() - &Rational::from(k as i64 - 1);
            c = c * factor / Rational::from(k as i64);
        }
        coeffs.push(c.clone());
    }

    TruncatedSeries::from_coeffs(coeffs)
}

impl PartialEq for TruncatedSeries {
    fn eq(&self, other: &Self) -> bool {
        let len = self.len().max(other.len());
        (0..len).all(|n| self.coeff(n) == other.coeff(n))
    }
}

impl Eq for TruncatedSeries {}

impl fmt::Display for TruncatedSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (n, c) in self.terms() {
            if c.is_zero() {
                continue;
            }
            if first {
                first = false;
            } else {
                write!(f, " + ")?;
            }

            if n == 0 {
                write!(f, "{c}")?;
            } else if n == 1 {
                write!(f, "{c}*x")?;
            } else {
                write!(f, "{c}*x^{n}")?;
            }
        }

        Ok(())
    }
}
