//! Decimal digit-count estimation for huge integers.
//!
//! Central binomial coefficients have digit counts proportional to n, so
//! converting them to decimal strings just to measure field widths would
//! dominate the whole render. Instead the count is recovered with
//! O(log max_exponent) big-integer divisions against a precomputed table of
//! power-of-ten thresholds.

use num::bigint::BigInt;
use num::traits::Zero;
use std::sync::OnceLock;

/// Largest table exponent doubling: the top threshold is 10^(2^14).
const MAX_DOUBLING: u32 = 14;

static THRESHOLDS: OnceLock<Vec<(BigInt, usize)>> = OnceLock::new();

/// Descending `(10^(2^k), 2^k)` pairs for k = MAX_DOUBLING down to 0.
///
/// Built once per process and never mutated afterwards, so sharing the
/// slice across threads is safe.
fn thresholds() -> &'static [(BigInt, usize)] {
    THRESHOLDS.get_or_init(|| {
        (0..=MAX_DOUBLING)
            .rev()
            .map(|k| {
                let exp = 1usize << k;
                (BigInt::from(10u32).pow(exp as u32), exp)
            })
            .collect()
    })
}

/// Number of decimal digits of a non-negative integer, without
/// materializing its decimal string.
///
/// # Parameters
/// - `x`: Non-negative value to measure. `digit_count(0)` is 1.
///
/// # Returns
/// The length of the base-10 representation of `x`.
pub fn digit_count(x: &BigInt) -> usize {
    debug_assert!(*x >= BigInt::zero(), "digit_count expects non-negative x");
    let table = thresholds();
    let (top, top_exp) = &table[0];
    let mut value = x.clone();
    let mut digits = 0usize;
    // Values above the top threshold shed 2^MAX_DOUBLING digits per pass.
    while &value >= top {
        value /= top;
        digits += top_exp;
    }
    for (threshold, exp) in &table[1..] {
        if &value >= threshold {
            value /= threshold;
            digits += exp;
        }
    }
    digits + 1
}

/// Minimum field width needed to render `x` with [`crate::format::scientific`].
///
/// The scientific form `D.ddd⋅10^E` needs one mantissa digit, a point,
/// `precision` decimals, the `⋅10` separator, and the exponent's digits
/// (the point disappears when `precision` is 0). Plain decimal rendering
/// needs `digit_count(x)` columns; whichever is narrower wins, so the
/// result never exceeds what plain rendering would require.
pub fn scientific_width(x: &BigInt, precision: usize) -> usize {
    let plain = digit_count(x);
    let exponent_digits = digit_count(&BigInt::from((plain - 1) as u64));
    let scientific = if precision == 0 {
        4 + exponent_digits
    } else {
        5 + precision + exponent_digits
    };
    plain.min(scientific)
}

/// Field width of a percentage with `precision` fractional digits: room for
/// up to three integer digits, the point, the decimals, and the '%' sign.
pub fn percent_width(precision: usize) -> usize {
    if precision == 0 {
        4
    } else {
        5 + precision
    }
}
