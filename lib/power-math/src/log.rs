use crate::constants::{FIXED_1, FIXED_2, MAX_NUM, MAX_PRECISION};
use crate::error::{PowerError, Result};
use crate::ratio::Ratio;
use crate::wide::{checked_add, checked_div, checked_mul, floor_log2, U256};

/// Fixed-point `log2(numerator / denominator)`, scaled by `2^MAX_PRECISION`
/// and rounded toward zero.
///
/// Requires `1 <= denominator <= numerator < MAX_NUM`.
pub fn scaled_log(ratio: &Ratio) -> Result<U256> {
    ratio.check_denominator()?;
    if ratio.is_below_one() {
        return Err(PowerError::BaseBelowOne);
    }
    if ratio.numerator >= MAX_NUM {
        return Err(PowerError::BaseTooLarge);
    }

    let mut x = checked_div(checked_mul(ratio.numerator, FIXED_1)?, ratio.denominator)?;
    let mut res = U256::zero();

    // Integer part: x >= 2 contributes floor(log2(x)) whole units.
    if x >= FIXED_2 {
        let count = floor_log2(x / FIXED_1)?;
        x = x >> count;
        res = checked_mul(FIXED_1, U256::from(count))?;
    }

    // Fractional part: 1 < x < 2, one bit per squaring.
    if x > FIXED_1 {
        for bit in (0..MAX_PRECISION).rev() {
            x = checked_mul(x, x)? / FIXED_1;
            if x >= FIXED_2 {
                x = x >> 1u32;
                res = checked_add(res, U256::one() << bit)?;
            }
        }
    }

    Ok(res)
}
