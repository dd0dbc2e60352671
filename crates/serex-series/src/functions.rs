//! Taylor coefficient tables for the elementary functions.
//!
//! Each function returns the Maclaurin series of the named function in
//! the formal variable, truncated at `order` coefficients. All values
//! are exact rationals. Logarithm is provided as `log1p` (the series of
//! `log(1 + x)`), since `log(x)` itself has no power series at 0.

use num_traits::{One, Zero};
use serex_numbers::Rational;

use crate::series::TruncatedSeries;

/// Series of `exp(x)`: coefficients `1/n!`.
#[must_use]
pub fn exp(order: usize) -> TruncatedSeries {
    let mut coeffs = Vec::with_capacity(order);
    let mut c = Rational::one();
    for n in 0..order {
        if n > 0 {
            c = c / Rational::from(n as i64);
        }
        coeffs.push(c.clone());
    }
    TruncatedSeries::from_coeffs(coeffs)
}

/// Series of `sin(x)`: `x - x^3/3! + x^5/5! - ...`.
#[must_use]
pub fn sin(order: usize) -> TruncatedSeries {
    alternating_factorial(order, 1)
}

/// Series of `cos(x)`: `1 - x^2/2! + x^4/4! - ...`.
#[must_use]
pub fn cos(order: usize) -> TruncatedSeries {
    alternating_factorial(order, 0)
}

/// Series of `sinh(x)`: `x + x^3/3! + x^5/5! + ...`.
#[must_use]
pub fn sinh(order: usize) -> TruncatedSeries {
    plain_factorial(order, 1)
}

/// Series of `cosh(x)`: `1 + x^2/2! + x^4/4! + ...`.
#[must_use]
pub fn cosh(order: usize) -> TruncatedSeries {
    plain_factorial(order, 0)
}

/// Series of `tan(x)`, computed as `sin / cos`.
#[must_use]
pub fn tan(order: usize) -> TruncatedSeries {
    let cos_inv = cos(order).inverse(order).expect("cos(0) = 1");
    sin(order).mul(&cos_inv, order)
}

/// Series of `tanh(x)`, computed as `sinh / cosh`.
#[must_use]
pub fn tanh(order: usize) -> TruncatedSeries {
    let cosh_inv = cosh(order).inverse(order).expect("cosh(0) = 1");
    sinh(order).mul(&cosh_inv, order)
}

/// Series of `log(1 + x)`: `x - x^2/2 + x^3/3 - ...`.
#[must_use]
pub fn log1p(order: usize) -> TruncatedSeries {
    let mut coeffs = vec![Rational::zero(); order.min(1)];
    for k in 1..order {
        let sign = if k % 2 == 0 { -1 } else { 1 };
        coeffs.push(Rational::from_i64(sign, k as i64));
    }
    TruncatedSeries::from_coeffs(coeffs)
}

/// Series of `atan(x)`: `x - x^3/3 + x^5/5 - ...`.
#[must_use]
pub fn atan(order: usize) -> TruncatedSeries {
    odd_reciprocal(order, true)
}

/// Series of `atanh(x)`: `x + x^3/3 + x^5/5 + ...`.
#[must_use]
pub fn atanh(order: usize) -> TruncatedSeries {
    odd_reciprocal(order, false)
}

/// Series of `asin(x)`: `x + x^3/6 + 3x^5/40 + ...`.
///
/// Coefficient of `x^(2k+1)` is `r_k / (2k+1)` where `r_k` is the
/// central binomial ratio `(2k)! / (4^k (k!)^2)`.
#[must_use]
pub fn asin(order: usize) -> TruncatedSeries {
    arcsine_family(order, false)
}

/// Series of `asinh(x)`: `x - x^3/6 + 3x^5/40 - ...`.
#[must_use]
pub fn asinh(order: usize) -> TruncatedSeries {
    arcsine_family(order, true)
}

/// Series with factorial denominators on every other degree: `parity`
/// selects odd (sin/sinh) or even (cos/cosh) terms; the alternating
/// variant flips the sign of successive emitted terms.
fn plain_factorial(order: usize, parity: usize) -> TruncatedSeries {
    factorial_series(order, parity, false)
}

fn alternating_factorial(order: usize, parity: usize) -> TruncatedSeries {
    factorial_series(order, parity, true)
}

fn factorial_series(order: usize, parity: usize, alternating: bool) -> TruncatedSeries {
    let mut coeffs = vec![Rational::zero(); order];
    let mut c = Rational::one();
    let mut negative = false;

    for n in 0..order {
        if n > 0 {
            c = c / Rational::from(n as i64);
        }
        if n % 2 == parity {
            coeffs[n] = if negative { -c.clone() } else { c.clone() };
            if alternating {
                negative = !negative;
            }
        }
    }

    TruncatedSeries::from_coeffs(coeffs)
}

/// Odd series with `1/(2k+1)` magnitudes: atan (alternating) and atanh.
fn odd_reciprocal(order: usize, alternating: bool) -> TruncatedSeries {
    let mut coeffs = vec![Rational::zero(); order];
    let mut k = 0usize;

    while 2 * k + 1 < order {
        let n = 2 * k + 1;
        let sign = if alternating && k % 2 == 1 { -1 } else { 1 };
        coeffs[n] = Rational::from_i64(sign, n as i64);
        k += 1;
    }

    TruncatedSeries::from_coeffs(coeffs)
}

/// Shared recurrence for asin and asinh: `r_0 = 1`,
/// `r_k = r_{k-1} * (2k-1) / (2k)`, coefficient `±r_k / (2k+1)`.
fn arcsine_family(order: usize, alternating: bool) -> TruncatedSeries {
    let mut coeffs = vec![Rational::zero(); order];
    let mut r = Rational::one();
    let mut k = 0usize;

    while 2 * k + 1 < order {
        if k > 0 {
            r = r * Rational::from(2 * k as i64 - 1) / Rational::from(2 * k as i64);
        }
        let n = 2 * k + 1;
        let sign = if alternating && k % 2 == 1 { -1 } else { 1 };
        coeffs[n] = Rational::from(sign) * &r / &Rational::from(n as i64);
        k += 1;
    }

    TruncatedSeries::from_coeffs(coeffs)
}
