use tracing::{debug, trace};

use crate::constants::MAX_PRECISION;
use crate::error::{PowerError, Result};
use crate::exp::scaled_exp;
use crate::log::scaled_log;
use crate::precision::find_precision;
use crate::ratio::Ratio;
use crate::wide::{mul_div, U256};

/// `value / 2^precision` approximates the requested power, from below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerResult {
    pub value: U256,
    pub precision: u8,
}

impl PowerResult {
    /// Exactly one, at full precision.
    pub fn one() -> Self {
        Self {
            value: U256::one() << MAX_PRECISION,
            precision: MAX_PRECISION,
        }
    }

    pub fn integer_part(&self) -> U256 {
        self.value >> self.precision
    }

    /// The value expressed at scale `2^MAX_PRECISION`, or `None` if that no
    /// longer fits in 256 bits.
    pub fn at_max_precision(&self) -> Option<U256> {
        let shift = MAX_PRECISION.saturating_sub(self.precision) as usize;
        if shift > 0 && self.value.bits() + shift > 256 {
            return None;
        }
        Some(self.value << shift)
    }
}

/// Computes `(base.numerator / base.denominator) ^ (exponent.numerator / exponent.denominator)`.
///
/// Bases must lie in `[1, 2^129)`. A zero base is rejected outright, whatever
/// the exponent. Results stay below `2^129` at their precision.
///
/// The result is never above the true power. Its relative error is below
/// `2^(4 - precision)` plus `(expN / expD) * 2^-125`, the second term being the
/// logarithm's truncation carried through the exponent.
pub fn power(base: &Ratio, exponent: &Ratio) -> Result<PowerResult> {
    base.check_denominator()?;
    exponent.check_denominator()?;
    if base.numerator.is_zero() {
        return Err(PowerError::ZeroBase);
    }

    let base_log = scaled_log(base)?;
    let scaled = match mul_div(base_log, exponent.numerator, exponent.denominator) {
        // Beyond 256 bits is beyond every level of the table.
        Err(PowerError::ArithmeticOverflow) => return Err(PowerError::ExponentInputTooLarge),
        other => other?,
    };

    let precision = find_precision(scaled)?;
    trace!(%base_log, %scaled, precision, "selected precision");

    let value = scaled_exp(scaled >> (MAX_PRECISION - precision), precision)?;
    debug!(%base, %exponent, %value, precision, "power");
    Ok(PowerResult { value, precision })
}
