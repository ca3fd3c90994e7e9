use num::bigint::BigInt;
use num::rational::BigRational;
use num::traits::{One, Pow, Zero};
use num::ToPrimitive;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("Probability must be between 0 and 1, got {0}")]
    ProbabilityOutOfRange(BigRational),
}

/// Parameters of a binomial distribution.
///
/// Models `n` independent Bernoulli trials, each succeeding with the exact
/// rational probability `p`. X is the total number of successes.
#[derive(Debug, Clone)]
pub struct BinomialParams {
    /// Number of trials.
    pub n: u64,
    /// Success probability of a single trial, in [0, 1].
    pub p: BigRational,
}

impl BinomialParams {
    /// Construct validated binomial parameters.
    ///
    /// # Parameters
    /// - `n`: Trial count.
    /// - `p`: Exact success probability.
    ///
    /// # Returns
    /// Validated parameters, or [`DistributionError::ProbabilityOutOfRange`]
    /// when `p` lies outside [0, 1]. The check runs before any sample is
    /// computed.
    pub fn new(n: u64, p: BigRational) -> Result<Self, DistributionError> {
        if p < BigRational::zero() || p > BigRational::one() {
            return Err(DistributionError::ProbabilityOutOfRange(p));
        }
        Ok(Self { n, p })
    }

    /// The mode bucket: the index maximizing the probability mass.
    ///
    /// Computed as `floor((n + 1) * p)`, clamped into the support. The clamp
    /// matters when `p = 1`, where the unclamped value lands at `n + 1`.
    pub fn mode(&self) -> u64 {
        let unclamped = (BigRational::from_integer(BigInt::from(self.n + 1)) * &self.p)
            .floor()
            .to_integer();
        unclamped.to_u64().map_or(self.n, |m| m.min(self.n))
    }

    /// Exact peak mass `P(X = mode) = C(n, mode) * p^mode * (1-p)^(n-mode)`,
    /// the normalization denominator for ratio-style bars.
    pub fn peak_mass(&self) -> BigRational {
        let mode = self.mode();
        let q = BigRational::one() - &self.p;
        BigRational::from_integer(binomial(self.n, mode))
            * rational_pow(&self.p, mode)
            * rational_pow(&q, self.n - mode)
    }

    /// Lazy sequence of per-bucket samples for `i = 0..=n`.
    ///
    /// Each sample is derived from the previous one in O(1) big-integer
    /// operations; no factorial is ever recomputed per bucket. The sequence
    /// is single-pass and non-restartable: call this again for a fresh pass.
    pub fn samples(&self) -> Samples {
        // p = 0 and p = 1 would divide by zero in the mass recurrence, so
        // the entire mass is pinned to one certain bucket up front.
        let certain = if self.p.is_zero() {
            Some(0)
        } else if self.p.is_one() {
            Some(self.n)
        } else {
            None
        };
        let q = BigRational::one() - &self.p;
        let seed_mass = match certain {
            Some(0) => BigRational::one(),
            Some(_) => BigRational::zero(),
            None => rational_pow(&q, self.n),
        };
        Samples {
            n: self.n,
            p: self.p.clone(),
            q,
            certain,
            next_index: 0,
            exhausted: false,
            coeff: BigInt::one(),
            mass: seed_mass.clone(),
            cumulative: seed_mass,
        }
    }
}

/// One bucket of the distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Bucket index `i`, the number of successes.
    pub index: u64,
    /// Exact binomial coefficient `C(n, i)`.
    pub coeff: BigInt,
    /// Exact probability mass `P(X = i)`.
    pub mass: BigRational,
    /// Exact cumulative probability `P(X <= i)`.
    pub cumulative: BigRational,
}

/// Single-pass iterator over the samples of a binomial distribution.
///
/// Owns the running coefficient, mass, and cumulative values; consumers only
/// ever see immutable snapshots. Dropping the iterator early is fine, but
/// there is no way to resume it afterwards.
pub struct Samples {
    n: u64,
    p: BigRational,
    q: BigRational,
    /// Bucket holding all the mass when `p` is exactly 0 or 1.
    certain: Option<u64>,
    next_index: u64,
    exhausted: bool,
    coeff: BigInt,
    mass: BigRational,
    cumulative: BigRational,
}

impl Iterator for Samples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.exhausted {
            return None;
        }
        let i = self.next_index;
        if i > 0 {
            let prev_coeff = self.coeff.clone();
            // Exact by C(n,i) = C(n,i-1) * (n-i+1) / i.
            self.coeff = &prev_coeff * (self.n - i + 1) / i;
            self.mass = match self.certain {
                Some(c) if i == c => BigRational::one(),
                Some(_) => BigRational::zero(),
                None => {
                    &self.mass * BigRational::from_integer(self.coeff.clone()) * &self.p
                        / (BigRational::from_integer(prev_coeff) * &self.q)
                }
            };
            self.cumulative += &self.mass;
        }
        let sample = Sample {
            index: i,
            coeff: self.coeff.clone(),
            mass: self.mass.clone(),
            cumulative: self.cumulative.clone(),
        };
        if i == self.n {
            self.exhausted = true;
        } else {
            self.next_index = i + 1;
        }
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match usize::try_from(self.n - self.next_index + 1) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Samples {}

/// Exact binomial coefficient C(n, k) using BigInt.
///
/// # Parameters
/// - `n`: Trial count.
/// - `k`: Success count.
///
/// # Returns
/// Exact integer value of `C(n, k)`.
pub fn binomial(n: u64, k: u64) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    // Use the smaller of k and n-k for efficiency
    let k = std::cmp::min(k, n - k);
    if k == 0 {
        return BigInt::one();
    }
    let mut result = BigInt::one();
    for i in 0..k {
        result *= BigInt::from(n - i);
        result /= BigInt::from(i + 1);
    }
    result
}

/// Exact `base^exp` for a non-negative integer exponent.
fn rational_pow(base: &BigRational, exp: u64) -> BigRational {
    BigRational::new(Pow::pow(base.numer(), exp), Pow::pow(base.denom(), exp))
}
