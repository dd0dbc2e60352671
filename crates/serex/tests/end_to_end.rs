//! End-to-end expansion through the public facade.

use serex::prelude::*;

fn q(n: i64, d: i64) -> Rational {
    Rational::from_i64(n, d)
}

#[test]
fn expands_tan_through_prelude() {
    let mut arena = ExprArena::new();
    let x = arena.symbol("x");
    let tan_x = arena.unary(functions::TAN, x);

    let s = expand(&arena, tan_x, 6).unwrap();
    assert_eq!(s.coeff(1), q(1, 1));
    assert_eq!(s.coeff(3), q(1, 3));
    assert_eq!(s.coeff(5), q(2, 15));
}

#[test]
fn sqrt_of_cosh_round_trips() {
    let mut arena = ExprArena::new();
    let x = arena.symbol("x");
    let cosh_x = arena.unary(functions::COSH, x);
    let half = arena.rational(1, 2);
    let p = arena.pow(cosh_x, half);

    let r = expand(&arena, p, 8).unwrap();
    let b = expand(&arena, cosh_x, 8).unwrap();
    assert_eq!(r.mul(&r, 8), b);
}

#[test]
fn classification_reports_failures_precisely() {
    let mut arena = ExprArena::new();
    let x = arena.symbol("x");
    let abs_x = arena.unary(functions::ABS, x);

    assert_eq!(classify(&arena, x), Feasibility::Expandable);
    assert_eq!(classify(&arena, abs_x), Feasibility::FunctionUnsupported);
    assert_eq!(
        expand(&arena, abs_x, 4),
        Err(ExpandError::UnsupportedFunction("abs".to_string()))
    );
}

#[test]
fn errors_display_readably() {
    assert_eq!(
        ExpandError::UnsupportedFunction("abs".to_string()).to_string(),
        "no series expansion registered for function `abs`"
    );
    assert_eq!(
        ExpandError::Series(SeriesError::NoRoot { degree: 3 }).to_string(),
        "series has no exact degree-3 root: constant term must be 1"
    );
}
