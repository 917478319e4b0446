use crate::Error;

/// The number of terms summed when the caller does not care to pick one.
/// Plenty for arguments of moderate size, nowhere near enough far from
/// the expansion point.
pub const DEFAULT_TERMS: usize = 10;

/// Approximate cos(x) by its truncated Maclaurin series,
/// Σ (-1)ⁿ · x²ⁿ / (2n)!  for n ∈ {0, …, terms - 1}.
///
/// Each term is evaluated independently from an integer power and a
/// factorial, rather than by the usual term-to-term recurrence: slower,
/// but term-for-term identical to the series as written.
///
/// The series converges for any finite `x`, although slowly once |x| grows
/// large relative to `terms`. Argument reduction is the caller's business
/// (see [`crate::angular::normalize_symmetric`]).
///
/// A term count of zero gives the empty sum, 0.0.
pub fn cosine(x: f64, terms: usize) -> f64 {
    let mut sum = 0.0;
    for n in 0..terms {
        let sign = if n % 2 == 0 { 1. } else { -1. };
        sum += sign * power(x, 2 * n) / factorial(2 * n);
    }
    sum
}

/// [`cosine`] with the default number of terms.
pub fn cosine_default(x: f64) -> f64 {
    cosine(x, DEFAULT_TERMS)
}

/// Approximate atan(x) by its truncated Maclaurin series,
/// Σ (-1)ⁿ · x²ⁿ⁺¹ / (2n+1)  for n ∈ {0, …, terms - 1}.
///
/// The expansion converges only on the closed interval [-1, 1], so
/// anything outside fails with [`Error::Domain`] before any summation
/// takes place. At x = ±1 the series degenerates to the alternating odd
/// harmonic series and converges at a glacial pace; it is summed as
/// specified anyway, with no special-casing.
///
/// A term count of zero gives the empty sum, 0.0.
pub fn arctangent(x: f64, terms: usize) -> Result<f64, Error> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(Error::Domain(x));
    }

    let mut sum = 0.0;
    for n in 0..terms {
        let sign = if n % 2 == 0 { 1. } else { -1. };
        sum += sign * power(x, 2 * n + 1) / (2 * n + 1) as f64;
    }
    Ok(sum)
}

/// [`arctangent`] with the default number of terms.
pub fn arctangent_default(x: f64) -> Result<f64, Error> {
    arctangent(x, DEFAULT_TERMS)
}

/// xⁿ for a cardinal exponent, by repeated multiplication. x⁰ = 1,
/// also for x = 0.
fn power(x: f64, n: usize) -> f64 {
    let mut product = 1.0;
    for _ in 0..n {
        product *= x;
    }
    product
}

/// n! as an f64. Exact up to 18! (the largest factorial a default-length
/// cosine sum asks for); beyond that the representation rounds, which is
/// dwarfed by the truncation error of any sum reaching that far.
fn factorial(n: usize) -> f64 {
    let mut product = 1.0;
    for i in 2..=n {
        product *= i as f64;
    }
    product
}

// ----- Tests ---------------------------------------------------------------------
