//! Terminal histogram of a binomial distribution, computed exactly.

mod hist;
mod rational;

use std::io::Write;

use clap::Parser;
use miette::{miette, IntoDiagnostic, Result};
use num::bigint::BigInt;
use num::rational::BigRational;
use tracing_subscriber::EnvFilter;

use binhist_dist::{BarStyle, BinomialParams};
use hist::{detected_width, print_histogram, HistogramConfig};

#[derive(Debug, Parser)]
#[command(name = "binhist", version, about = "Draw the exact distribution of n independent yes/no trials")]
struct Cli {
    /// Number of trials.
    n: u64,

    /// Success probability per trial, as a fraction (`1/6`), decimal
    /// (`0.25`), or integer. Must lie in [0, 1].
    #[arg(short, long, default_value = "1/2")]
    probability: String,

    /// Fractional digits for percentages and mantissas. Negative values
    /// are treated as zero.
    #[arg(short = 'P', long, default_value_t = 2)]
    precision: i64,

    /// Total output width in columns. Defaults to the terminal width,
    /// or 100 when it cannot be detected.
    #[arg(short, long)]
    width: Option<usize>,

    /// Bar style: ratio, cumulative, or inverse-cumulative.
    #[arg(short, long, default_value = "ratio")]
    style: String,

    /// Suppress buckets whose probability is below this many percent.
    #[arg(short, long, default_value = "0")]
    min: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let p = rational::parse_rational(&cli.probability)
        .map_err(|e| miette!("invalid probability '{}': {e}", cli.probability))?;
    let params = BinomialParams::new(cli.n, p)
        .map_err(|e| miette!("{e} (the probability must lie between 0 and 1)"))?;

    let style: BarStyle = cli.style.parse().map_err(|e| miette!("{e}"))?;
    let min_percent = rational::parse_rational(&cli.min)
        .map_err(|e| miette!("invalid minimum '{}': {e}", cli.min))?;
    let min_mass = min_percent / BigRational::from_integer(BigInt::from(100));

    let config = HistogramConfig {
        precision: cli.precision.max(0) as usize,
        width: cli.width.unwrap_or_else(detected_width),
        style,
        min_mass,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_histogram(&params, &config, &mut out).into_diagnostic()?;
    out.flush().into_diagnostic()?;
    Ok(())
}
