//! Benchmarks for series arithmetic and end-to-end expansion.
//!
//! Includes:
//! - Truncated series arithmetic (mul, inverse, composition)
//! - Elementary function coefficient tables
//! - Full expression expansion at increasing truncation orders

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use serex_core::arena::ExprArena;
use serex_core::expr::functions;
use serex_expand::expand;
use serex_numbers::Rational;
use serex_series::functions as tables;
use serex_series::TruncatedSeries;

fn q(n: i64, d: i64) -> Rational {
    Rational::from_i64(n, d)
}

/// Benchmark truncated series multiplication (Cauchy product).
fn bench_series_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_mul");

    for order in [10, 20, 50] {
        let exp = tables::exp(order);

        group.bench_with_input(BenchmarkId::new("exp_squared", order), &order, |b, &n| {
            b.iter(|| {
                let result = exp.mul(&exp, n);
                for i in 0..5 {
                    black_box(result.coeff(i));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark series inversion.
fn bench_series_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_inverse");

    for order in [10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("1/(1+x)", order), &order, |b, &n| {
            b.iter(|| {
                // Invert 1 + x; result alternates signs
                let series = TruncatedSeries::from_coeffs(vec![q(1, 1), q(1, 1)]);
                let inv = series.inverse(n);
                black_box(inv.map(|s| s.coeff(0)))
            })
        });
    }

    group.finish();
}

/// Benchmark series composition (Horner's rule).
fn bench_series_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_compose");

    for order in [10, 20, 50] {
        let exp = tables::exp(order);
        let sin = tables::sin(order);

        group.bench_with_input(BenchmarkId::new("exp_of_sin", order), &order, |b, &n| {
            b.iter(|| {
                let result = exp.compose(&sin, n);
                black_box(result.map(|s| s.coeff(0)))
            })
        });
    }

    group.finish();
}

/// Benchmark coefficient table generation.
fn bench_function_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("function_tables");

    for order in [10, 50, 100] {
        group.bench_with_input(BenchmarkId::new("exp", order), &order, |b, &n| {
            b.iter(|| {
                let exp = tables::exp(n);
                for i in 0..5 {
                    black_box(exp.coeff(i));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("tan", order), &order, |b, &n| {
            b.iter(|| {
                let tan = tables::tan(n);
                for i in 0..5 {
                    black_box(tan.coeff(i));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark end-to-end expression expansion.
fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    // exp(sin(x))
    group.bench_function("exp_sin_x", |b| {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let sin_x = arena.unary(functions::SIN, x);
        let exp_sin_x = arena.unary(functions::EXP, sin_x);

        b.iter(|| black_box(expand(&arena, exp_sin_x, 20)))
    });

    // cos(x)^(-1/2)
    group.bench_function("cos_x_pow_neg_half", |b| {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let cos_x = arena.unary(functions::COS, x);
        let e = arena.rational(-1, 2);
        let p = arena.pow(cos_x, e);

        b.iter(|| black_box(expand(&arena, p, 20)))
    });

    // tan(x)^3 at increasing orders
    for order in [10, 20, 50] {
        let mut arena = ExprArena::new();
        let x = arena.symbol("x");
        let tan_x = arena.unary(functions::TAN, x);
        let three = arena.integer(3);
        let p = arena.pow(tan_x, three);

        group.bench_with_input(BenchmarkId::new("tan_x_cubed", order), &order, |b, &n| {
            b.iter(|| black_box(expand(&arena, p, n)))
        });
    }

    group.finish();
}

criterion_group!(
    expand_benches,
    bench_series_mul,
    bench_series_inverse,
    bench_series_compose,
    bench_function_tables,
    bench_expand,
);

criterion_main!(expand_benches);
