//! Histogram orchestration: pulls samples one at a time, formats each row,
//! and writes it out before the next sample is generated, so memory stays
//! bounded to a single sample no matter how large n gets.

use std::io::Write;

use num::bigint::BigInt;
use num::rational::BigRational;
use num::traits::One;
use tracing::debug;

use binhist_dist::format::{percent, scientific};
use binhist_dist::magnitude::{digit_count, percent_width, scientific_width};
use binhist_dist::{binomial, BarStyle, BinomialParams, Sample};

pub struct HistogramConfig {
    /// Fractional digits for percentages and scientific mantissas.
    pub precision: usize,
    /// Total output width in columns, bar included.
    pub width: usize,
    /// Bar normalization style, fixed for the whole pass.
    pub style: BarStyle,
    /// Buckets with mass below this are not printed.
    pub min_mass: BigRational,
}

/// Column layout shared by every row of one render pass.
struct RowLayout {
    index_width: usize,
    coeff_width: usize,
    bar_width: usize,
    precision: usize,
}

impl RowLayout {
    fn new(params: &BinomialParams, config: &HistogramConfig) -> Self {
        // The widest coefficient sits at the center bucket, which is not the
        // mass mode for skewed probabilities; size the column off the center.
        let widest_coeff = binomial(params.n, params.n / 2);
        let index_width = digit_count(&BigInt::from(params.n));
        let coeff_width = scientific_width(&widest_coeff, config.precision);
        let separators = 6 + 3 * percent_width(config.precision);
        let bar_width = config
            .width
            .saturating_sub(separators + index_width + coeff_width);
        RowLayout {
            index_width,
            coeff_width,
            bar_width,
            precision: config.precision,
        }
    }
}

fn render_row(
    sample: &Sample,
    peak_mass: &BigRational,
    layout: &RowLayout,
    style: BarStyle,
) -> String {
    let upper = BigRational::one() - &sample.cumulative + &sample.mass;
    let bar = style.render(
        &sample.mass,
        &sample.cumulative,
        peak_mass,
        layout.bar_width,
    );
    format!(
        "{index:>iw$}: {coeff} {mass} {cumulative} {upper} {bar}",
        index = sample.index,
        iw = layout.index_width,
        coeff = scientific(&sample.coeff, layout.precision, layout.coeff_width),
        mass = percent(&sample.mass, layout.precision),
        cumulative = percent(&sample.cumulative, layout.precision),
        upper = percent(&upper, layout.precision),
    )
}

/// Print one row per bucket, suppressing those below the configured
/// minimum mass. Suppression never disturbs the cumulative bookkeeping.
pub fn print_histogram<W: Write>(
    params: &BinomialParams,
    config: &HistogramConfig,
    out: &mut W,
) -> std::io::Result<()> {
    let layout = RowLayout::new(params, config);
    let peak_mass = params.peak_mass();
    debug!(
        n = params.n,
        mode = params.mode(),
        bar_width = layout.bar_width,
        "rendering histogram"
    );
    for sample in params.samples() {
        if sample.mass < config.min_mass {
            continue;
        }
        writeln!(
            out,
            "{}",
            render_row(&sample, &peak_mass, &layout, config.style)
        )?;
    }
    Ok(())
}

/// Terminal width in columns, falling back to 100 when detection fails
/// (e.g. output is not a tty).
pub fn detected_width() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _rows)) => columns as usize,
        Err(_) => 100,
    }
}
