//! Exact binomial distribution computation and terminal rendering primitives.
//!
//! Everything in this crate stays in arbitrary-precision integer/rational
//! arithmetic: probability masses are never approximated by floating point
//! inside the engine, so histograms remain correct for trial counts where
//! the binomial coefficients run to thousands of digits. The only deliberate
//! floating-point shortcut is the low-precision percent formatting path in
//! [`format::percent`].

pub mod bar;
pub mod binomial;
pub mod format;
pub mod magnitude;

pub use bar::{render_bar, BarStyle};
pub use binomial::{binomial, BinomialParams, DistributionError, Sample, Samples};
pub use format::{percent, scientific};
pub use magnitude::{digit_count, percent_width, scientific_width};
