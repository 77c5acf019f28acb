use crate::constants::{MAX_PRECISION, MIN_PRECISION};
use crate::error::{PowerError, Result};
use crate::table::max_exp;
use crate::wide::U256;

/// True when `value`, at scale `2^MAX_PRECISION`, fits level `precision` once
/// shifted down to that level's scale. Equality with the bound counts as fitting.
fn covers(precision: u8, value: U256) -> Result<bool> {
    Ok((value >> (MAX_PRECISION - precision)) <= max_exp(precision)?)
}

/// Finest precision level able to evaluate `value` (at scale `2^MAX_PRECISION`).
///
/// Coverage holds for every level up to some cutoff and for none above it, so
/// the cutoff is located by bisection over the table.
pub fn find_precision(value: U256) -> Result<u8> {
    let mut lo = MIN_PRECISION;
    let mut hi = MAX_PRECISION;
    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if covers(mid, value)? {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    if covers(hi, value)? {
        return Ok(hi);
    }
    if covers(lo, value)? {
        return Ok(lo);
    }
    Err(PowerError::ExponentInputTooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::levels;

    #[test]
    fn test_boundary_sweep() {
        for precision in levels() {
            let bound = max_exp(precision).unwrap();
            let shift = MAX_PRECISION - precision;
            let scale = |x: U256| x << shift;
            let one = U256::one();

            assert_eq!(find_precision(scale(bound) - one), Ok(precision));
            assert_eq!(find_precision(scale(bound)), Ok(precision));
            assert_eq!(find_precision(scale(bound + one) - one), Ok(precision));

            let expected = if precision == MIN_PRECISION {
                Err(PowerError::ExponentInputTooLarge)
            } else {
                Ok(precision - 1)
            };
            assert_eq!(find_precision(scale(bound + one)), expected, "level {}", precision);
        }
    }

    #[test]
    fn test_small_values_get_full_precision() {
        assert_eq!(find_precision(U256::zero()), Ok(MAX_PRECISION));
        assert_eq!(find_precision(U256::one() << 127u32), Ok(MAX_PRECISION));
    }

    #[test]
    fn test_huge_values_rejected() {
        assert_eq!(find_precision(U256::MAX), Err(PowerError::ExponentInputTooLarge));
        let past_coarsest = (max_exp(MIN_PRECISION).unwrap() + U256::one())
            << (MAX_PRECISION - MIN_PRECISION);
        assert_eq!(find_precision(past_coarsest), Err(PowerError::ExponentInputTooLarge));
    }

    #[test]
    fn test_selected_level_admits_shifted_value() {
        let mut value = U256::one();
        while let Ok(precision) = find_precision(value) {
            let shifted = value >> (MAX_PRECISION - precision);
            assert!(shifted <= max_exp(precision).unwrap());
            value = value * U256::from(3u64);
        }
    }
}
