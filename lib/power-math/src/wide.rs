use crate::error::{PowerError, Result};

pub use self::types::{U256, U512};

// The macro expands to code naming `Result<_, _>`, so it lives where the
// crate's one-parameter alias is not in scope.
mod types {
    use uint::construct_uint;

    construct_uint! {
        pub struct U256(4);
    }

    construct_uint! {
        pub struct U512(8);
    }
}

/// Builds a `U256` from its high and low 128-bit halves.
pub const fn wide(hi: u128, lo: u128) -> U256 {
    U256([lo as u64, (lo >> 64) as u64, hi as u64, (hi >> 64) as u64])
}

#[inline]
pub fn widen(x: U256) -> U512 {
    let U256(ref limbs) = x;
    U512([limbs[0], limbs[1], limbs[2], limbs[3], 0, 0, 0, 0])
}

/// Returns the low 256 bits, or `ArithmeticOverflow` if anything is set above them.
#[inline]
pub fn narrow(x: U512) -> Result<U256> {
    let U512(ref limbs) = x;
    if limbs[4..].iter().any(|&limb| limb != 0) {
        return Err(PowerError::ArithmeticOverflow);
    }
    Ok(U256([limbs[0], limbs[1], limbs[2], limbs[3]]))
}

/// Full 512-bit product; never overflows.
#[inline]
pub fn wide_mul(x: U256, y: U256) -> U512 {
    widen(x) * widen(y)
}

#[inline]
pub fn checked_add(x: U256, y: U256) -> Result<U256> {
    x.checked_add(y).ok_or(PowerError::ArithmeticOverflow)
}

#[inline]
pub fn checked_sub(x: U256, y: U256) -> Result<U256> {
    x.checked_sub(y).ok_or(PowerError::ArithmeticOverflow)
}

#[inline]
pub fn checked_mul(x: U256, y: U256) -> Result<U256> {
    x.checked_mul(y).ok_or(PowerError::ArithmeticOverflow)
}

#[inline]
pub fn checked_div(x: U256, y: U256) -> Result<U256> {
    x.checked_div(y).ok_or(PowerError::ZeroDenominator)
}

/// `x * y / denominator` rounded down, with a 512-bit intermediate product.
pub fn mul_div(x: U256, y: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(PowerError::ZeroDenominator);
    }
    narrow(wide_mul(x, y) / widen(denominator))
}

/// Zero-based index of the highest set bit.
pub fn floor_log2(x: U256) -> Result<u8> {
    if x.is_zero() {
        return Err(PowerError::ZeroLogarithm);
    }
    Ok((x.bits() - 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_log2_every_bit() {
        for n in 1..=255usize {
            let power = U256::one() << n;
            let below_next = power | (power - U256::one());
            assert_eq!(floor_log2(power), Ok(n as u8), "2^{}", n);
            assert_eq!(floor_log2(power + U256::one()), Ok(n as u8), "2^{}+1", n);
            assert_eq!(floor_log2(below_next), Ok(n as u8), "2^{}-1", n + 1);
        }
    }

    #[test]
    fn test_floor_log2_edges() {
        assert_eq!(floor_log2(U256::one()), Ok(0));
        assert_eq!(floor_log2(U256::MAX), Ok(255));
        assert_eq!(floor_log2(U256::zero()), Err(PowerError::ZeroLogarithm));
    }

    #[test]
    fn test_wide_halves() {
        let x = wide(1, 2);
        assert_eq!(x, (U256::one() << 128usize) + U256::from(2u64));
        assert_eq!(wide(0, u128::MAX), U256::from(u128::MAX));
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        assert_eq!(
            checked_add(U256::MAX, U256::one()),
            Err(PowerError::ArithmeticOverflow)
        );
        assert_eq!(
            checked_sub(U256::zero(), U256::one()),
            Err(PowerError::ArithmeticOverflow)
        );
        assert_eq!(
            checked_mul(U256::one() << 128usize, U256::one() << 128usize),
            Err(PowerError::ArithmeticOverflow)
        );
        assert_eq!(
            checked_div(U256::one(), U256::zero()),
            Err(PowerError::ZeroDenominator)
        );
        assert_eq!(checked_mul(U256::from(6u64), U256::from(7u64)), Ok(U256::from(42u64)));
    }

    #[test]
    fn test_mul_div_keeps_wide_intermediate() {
        let big = U256::one() << 200usize;
        // big * big overflows 256 bits, the quotient does not.
        assert_eq!(mul_div(big, big, big), Ok(big));
        assert_eq!(mul_div(U256::from(7u64), U256::from(3u64), U256::from(2u64)), Ok(U256::from(10u64)));
        assert_eq!(mul_div(big, big, U256::one()), Err(PowerError::ArithmeticOverflow));
        assert_eq!(mul_div(big, big, U256::zero()), Err(PowerError::ZeroDenominator));
    }

    #[test]
    fn test_parses_hex_through_from_str_radix() {
        assert_eq!(U256::from_str_radix("ff", 16).ok(), Some(U256::from(255u64)));
        assert!(U256::from_str_radix("zz", 16).is_err());
        assert_eq!(
            U512::from_str_radix("1", 10).ok().map(|x| x << 300usize),
            Some(U512::one() << 300usize)
        );
    }

    #[test]
    fn test_narrow_round_trip() {
        assert_eq!(narrow(widen(U256::MAX)), Ok(U256::MAX));
        assert_eq!(
            narrow(widen(U256::MAX) + U512::one()),
            Err(PowerError::ArithmeticOverflow)
        );
    }
}
