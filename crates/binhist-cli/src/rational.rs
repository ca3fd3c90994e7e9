//! Exact rational parsing for command-line values.

use num::bigint::{BigInt, ParseBigIntError};
use num::rational::BigRational;
use num::traits::Zero;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseRationalError {
    #[error("invalid number: {0}")]
    Int(#[from] ParseBigIntError),
    #[error("denominator must not be zero")]
    ZeroDenominator,
    #[error("empty value")]
    Empty,
}

/// Parse an exact rational from `a/b`, decimal (`0.25`), or integer form.
pub fn parse_rational(s: &str) -> Result<BigRational, ParseRationalError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseRationalError::Empty);
    }
    if let Some((numer, denom)) = s.split_once('/') {
        let numer: BigInt = numer.trim().parse()?;
        let denom: BigInt = denom.trim().parse()?;
        if denom.is_zero() {
            return Err(ParseRationalError::ZeroDenominator);
        }
        return Ok(BigRational::new(numer, denom));
    }
    if let Some((int_part, frac_part)) = s.split_once('.') {
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseRationalError::Empty);
        }
        let int_part = if int_part.is_empty() { "0" } else { int_part };
        let numer: BigInt = format!("{int_part}{frac_part}").parse()?;
        let denom = BigInt::from(10u32).pow(frac_part.len() as u32);
        return Ok(BigRational::new(numer, denom));
    }
    Ok(BigRational::from_integer(s.parse()?))
}
