use thiserror::Error;

use crate::constants::{MAX_PRECISION, MIN_PRECISION};

pub type Result<T> = std::result::Result<T, PowerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowerError {
    #[error("ratio has a zero denominator")]
    ZeroDenominator,

    #[error("base is zero")]
    ZeroBase,

    #[error("base is below one")]
    BaseBelowOne,

    #[error("base numerator must be below 2^{}", 256 - MAX_PRECISION as u32)]
    BaseTooLarge,

    #[error("scaled exponent is too large for every precision level")]
    ExponentInputTooLarge,

    #[error("precision {0} is outside {}..={}", MIN_PRECISION, MAX_PRECISION)]
    InvalidPrecision(u8),

    #[error("logarithm of zero")]
    ZeroLogarithm,

    /// An intermediate value exceeded 256 bits. The precision table exists to
    /// keep this unreachable from `power`, so hitting it there means the table
    /// is wrong.
    #[error("256-bit arithmetic overflow")]
    ArithmeticOverflow,

    #[error("invalid number `{0}`")]
    Parse(String),
}

impl PowerError {
    /// Stable kebab-case name, used by batch files to state expected failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ZeroDenominator => "zero-denominator",
            Self::ZeroBase => "zero-base",
            Self::BaseBelowOne => "base-below-one",
            Self::BaseTooLarge => "base-too-large",
            Self::ExponentInputTooLarge => "exponent-too-large",
            Self::InvalidPrecision(_) => "invalid-precision",
            Self::ZeroLogarithm => "zero-logarithm",
            Self::ArithmeticOverflow => "arithmetic-overflow",
            Self::Parse(_) => "parse",
        }
    }
}
