use num_bigint::BigInt;
use thiserror::Error;

/// Failures while turning a digit string into an integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty digit string")]
    EmptyDigits,
    #[error("unsupported base {0}, expected 2..=36")]
    UnsupportedBase(u32),
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },
}

/// Failures while assembling a share set or interpolating through it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconError {
    #[error("share {id}: {source}")]
    Decode {
        id: u64,
        #[source]
        source: DecodeError,
    },
    #[error("threshold must be at least 1")]
    InvalidThreshold,
    #[error("need {needed} shares to reconstruct, only {available} available")]
    InsufficientShares { needed: usize, available: usize },
    #[error("duplicate x-coordinate {x} among selected shares")]
    DuplicateAbscissa { x: BigInt },
}
