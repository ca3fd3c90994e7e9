//! Fixed-width numeric formatting that stays exact at arbitrary precision.

use std::cmp::Ordering;

use num::bigint::BigInt;
use num::rational::BigRational;
use num::traits::One;
use num::{Integer, ToPrimitive};

use crate::magnitude::{digit_count, percent_width, scientific_width};

/// Superscript glyphs for the exponent digits 0-9.
const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Precision at which [`percent`] abandons f64 and switches to exact
/// integer rounding. Double precision carries about 16 significant decimal
/// digits; below that it rounds correctly and is much faster.
pub const EXACT_PERCENT_PRECISION: usize = 16;

/// Render an exponent in superscript glyphs, left-padded with `⁰` to
/// `pad_to` characters.
fn superscript(exponent: i64, pad_to: usize) -> String {
    let mut glyphs: Vec<char> = exponent
        .unsigned_abs()
        .to_string()
        .bytes()
        .map(|b| SUPERSCRIPT_DIGITS[(b - b'0') as usize])
        .collect();
    if exponent < 0 {
        glyphs.insert(0, '⁻');
    }
    let mut out = String::new();
    for _ in glyphs.len()..pad_to {
        out.push('⁰');
    }
    out.extend(glyphs);
    out
}

/// Render a non-negative integer in exactly `width` characters.
///
/// When the plain decimal fits, it is right-aligned as-is. Otherwise the
/// value becomes `D.ddd⋅10^E`: the most significant digit, the next
/// `precision` digits (truncated), and the exponent
/// `E = digit_count(x) - 1` in superscript glyphs padded out with `⁰`.
///
/// Callers must request `width >= scientific_width(x, precision)`;
/// anything narrower is a programmer error.
pub fn scientific(x: &BigInt, precision: usize, width: usize) -> String {
    debug_assert!(
        width >= scientific_width(x, precision),
        "width {width} below the minimum for {precision} decimals"
    );
    let digits = digit_count(x);
    if digits <= width {
        return format!("{x:>width$}");
    }
    let head = (x / BigInt::from(10u32).pow((digits - precision - 1) as u32)).to_string();
    let exponent_pad = if precision == 0 {
        width - 4
    } else {
        width - 5 - precision
    };
    let exponent = superscript((digits - 1) as i64, exponent_pad);
    if precision == 0 {
        format!("{}⋅10{exponent}", &head[..1])
    } else {
        format!("{}.{}⋅10{exponent}", &head[..1], &head[1..])
    }
}

/// Render a probability as a percentage with exactly `precision` fractional
/// digits and a trailing '%', right-aligned in `percent_width(precision)`
/// characters.
///
/// Below [`EXACT_PERCENT_PRECISION`] the value is rounded through f64;
/// at or above it, the exact scaled rational is rounded half-to-even on
/// integers, so the output stays correct no matter how many digits are
/// requested. That boundary is deliberate: native floating point cannot be
/// trusted past its own precision.
pub fn percent(x: &BigRational, precision: usize) -> String {
    let width = percent_width(precision);
    let body = if precision < EXACT_PERCENT_PRECISION {
        let value = x.to_f64().unwrap_or(f64::NAN) * 100.0;
        format!("{value:.precision$}")
    } else {
        exact_percent_digits(x, precision)
    };
    format!("{:>width$}", format!("{body}%"))
}

/// Digits of `x * 100` with `precision` fractional places, computed exactly.
fn exact_percent_digits(x: &BigRational, precision: usize) -> String {
    let scale = BigInt::from(10u32).pow(precision as u32) * 100;
    let rounded = round_half_even(&(x * BigRational::from_integer(scale)));
    let mut digits = rounded.to_string();
    if precision == 0 {
        return digits;
    }
    if digits.len() <= precision {
        digits = format!("{digits:0>width$}", width = precision + 1);
    }
    let split = digits.len() - precision;
    format!("{}.{}", &digits[..split], &digits[split..])
}

/// Round an exact rational to the nearest integer, ties to even, matching
/// the rounding of the fast floating-point path.
pub(crate) fn round_half_even(r: &BigRational) -> BigInt {
    let floor = r.floor().to_integer();
    let twice_fraction =
        (r - BigRational::from_integer(floor.clone())) * BigRational::from_integer(BigInt::from(2));
    match twice_fraction.cmp(&BigRational::one()) {
        Ordering::Less => floor,
        Ordering::Greater => floor + 1,
        Ordering::Equal => {
            if floor.is_multiple_of(&BigInt::from(2)) {
                floor
            } else {
                floor + 1
            }
        }
    }
}
