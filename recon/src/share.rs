use log::debug;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::decode::decode_digits;
use crate::errors::ReconError;
use crate::lagrange::interpolate_at;

/// A single point (x, y) on the sharing polynomial. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    pub x: BigInt,
    pub y: BigInt,
}

impl Share {
    #[inline]
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    /// Decodes the share keyed by [id], whose y-coordinate is [digits]
    /// written in [base]. The id doubles as the x-coordinate.
    pub fn decode(id: u64, base: u32, digits: &str) -> Result<Self, ReconError> {
        let y = decode_digits(digits, base).map_err(|source| ReconError::Decode { id, source })?;
        Ok(Self::new(BigInt::from(id), BigInt::from(y)))
    }
}

/// The shares available for one secret, together with the reconstruction
/// threshold.
#[derive(Clone, Debug)]
pub struct ShareSet {
    shares: Vec<Share>,
    threshold: usize,
}

impl ShareSet {
    /// Creates a share set, checking that [threshold] is at least one and
    /// that enough shares are present.
    pub fn new(shares: Vec<Share>, threshold: usize) -> Result<Self, ReconError> {
        if threshold == 0 {
            return Err(ReconError::InvalidThreshold);
        }
        if shares.len() < threshold {
            return Err(ReconError::InsufficientShares {
                needed: threshold,
                available: shares.len(),
            });
        }
        Ok(Self { shares, threshold })
    }

    /// Returns the [threshold].
    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns all shares in input order.
    #[inline]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// The [threshold] shares with the lowest x-coordinates, ascending.
    /// Equal x-coordinates keep their input order.
    pub fn select(&self) -> Vec<&Share> {
        let mut selected: Vec<&Share> = self.shares.iter().collect();
        selected.sort_by(|a, b| a.x.cmp(&b.x));
        selected.truncate(self.threshold);
        selected
    }

    /// Reconstructs the secret, the value at x = 0 of the polynomial through
    /// the selected shares.
    pub fn reconstruct(&self) -> Result<BigInt, ReconError> {
        let selected: Vec<Share> = self.select().into_iter().cloned().collect();
        debug!(
            "interpolating {} of {} shares at zero",
            selected.len(),
            self.shares.len()
        );
        interpolate_at(&selected, &BigInt::zero())
    }
}
