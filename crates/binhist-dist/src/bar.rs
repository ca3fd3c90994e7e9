//! Bar rendering at one-eighth character resolution.

use std::str::FromStr;

use num::bigint::BigInt;
use num::rational::BigRational;
use num::traits::One;
use num::ToPrimitive;
use thiserror::Error;

use crate::format::round_half_even;

/// Partial block glyphs indexed by leftover eighths (0 selects no glyph).
const PARTIAL_BLOCKS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];
const FULL_BLOCK: &str = "█";

#[derive(Debug, Error)]
#[error("Unknown bar style '{0}' (expected ratio, cumulative, or inverse-cumulative)")]
pub struct UnknownBarStyle(String);

/// Render a bar of `fraction * max_width` character cells, rounded to the
/// nearest eighth of a cell, ties to even.
///
/// # Parameters
/// - `fraction`: Fill ratio; callers normalize it into [0, 1] upstream.
/// - `max_width`: Bar length in full character cells at `fraction = 1`.
///
/// # Returns
/// Full block characters plus at most one partial glyph; empty when the
/// rounded length is below one eighth.
pub fn render_bar(fraction: &BigRational, max_width: usize) -> String {
    let eighths = round_half_even(
        &(fraction * BigRational::from_integer(BigInt::from(max_width as u64 * 8))),
    );
    let eighths = eighths.to_u64().unwrap_or(0);
    let full = (eighths / 8) as usize;
    let rem = (eighths % 8) as usize;
    let mut bar = FULL_BLOCK.repeat(full);
    bar.push_str(PARTIAL_BLOCKS[rem]);
    bar
}

/// Normalization style applied uniformly to every row of a render pass.
///
/// A closed set, resolved once at configuration time; styles cannot be
/// added at runtime. Each variant is a pure function of the current
/// sample's mass and cumulative probability plus the precomputed peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    /// Normalize by the peak mass, so the mode bucket fills the width.
    Ratio,
    /// Bar length follows the cumulative probability P(X <= i).
    Cumulative,
    /// Bar length follows the upper tail including the current bucket,
    /// `1 - cumulative + mass`.
    InverseCumulative,
}

impl BarStyle {
    /// Render one row's bar.
    ///
    /// # Parameters
    /// - `mass`: Exact mass of the current bucket.
    /// - `cumulative`: Exact cumulative probability up to this bucket.
    /// - `peak_mass`: Maximum mass across the distribution (mode bucket).
    /// - `max_width`: Bar length in character cells at full scale.
    pub fn render(
        self,
        mass: &BigRational,
        cumulative: &BigRational,
        peak_mass: &BigRational,
        max_width: usize,
    ) -> String {
        match self {
            BarStyle::Ratio => render_bar(&(mass / peak_mass), max_width),
            BarStyle::Cumulative => render_bar(cumulative, max_width),
            BarStyle::InverseCumulative => {
                render_bar(&(BigRational::one() - cumulative + mass), max_width)
            }
        }
    }
}

impl FromStr for BarStyle {
    type Err = UnknownBarStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ratio" => Ok(BarStyle::Ratio),
            "cumulative" => Ok(BarStyle::Cumulative),
            "inverse-cumulative" => Ok(BarStyle::InverseCumulative),
            other => Err(UnknownBarStyle(other.to_string())),
        }
    }
}
