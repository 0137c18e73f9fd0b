use log::warn;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::ReconError;
use crate::share::Share;

/// Horner evaluation of a polynomial given its coefficients, constant term
/// first.
pub fn eval(coeffs: &[BigInt], x: &BigInt) -> BigInt {
    let mut b = match coeffs.last() {
        None => return BigInt::zero(),
        Some(b) => b.clone(),
    };
    for c in coeffs.iter().rev().skip(1) {
        b *= x;
        b += c;
    }
    b
}

/// Value at [x] of the unique polynomial of degree `points.len() - 1`
/// passing through [points].
///
/// Per term, the quotient of the accumulated numerator and denominator
/// products is taken in one integer division. The division is exact whenever
/// the points lie on a polynomial with integer coefficients; otherwise the
/// quotient truncates toward zero, which is logged at warn level.
pub fn interpolate_at(points: &[Share], x: &BigInt) -> Result<BigInt, ReconError> {
    let mut result = BigInt::zero();

    for (i, pi) in points.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if pi.x == pj.x {
                return Err(ReconError::DuplicateAbscissa { x: pi.x.clone() });
            }
            numerator *= x - &pj.x;
            denominator *= &pi.x - &pj.x;
        }

        let term = &pi.y * numerator;
        if !term.is_multiple_of(&denominator) {
            warn!(
                "shares are not consistent with an integer polynomial, truncating the term at x = {}",
                pi.x
            );
        }
        result += term / &denominator;
    }

    Ok(result)
}
