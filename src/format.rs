use power_math::{PowerError, Result, MAX_PRECISION, U256};

/// Renders `value / 2^precision` in decimal with `digits` fractional digits.
/// Digits past the last one are dropped, never rounded up.
///
/// Only table precisions are accepted; anything above `MAX_PRECISION` is
/// `InvalidPrecision`.
pub fn format_fixed(value: U256, precision: u8, digits: usize) -> Result<String> {
    if precision > MAX_PRECISION {
        return Err(PowerError::InvalidPrecision(precision));
    }
    let mask = (U256::one() << precision) - U256::one();
    let mut rendered = (value >> precision).to_string();
    if digits == 0 {
        return Ok(rendered);
    }

    rendered.push('.');
    let ten = U256::from(10u64);
    let mut fraction = value & mask;
    for _ in 0..digits {
        // fraction < 2^MAX_PRECISION, so fraction * 10 < 2^131
        fraction = fraction * ten;
        rendered.push(char::from(b'0' + (fraction >> precision).low_u64() as u8));
        fraction = fraction & mask;
    }
    Ok(rendered)
}

/// Lower-case hex with a `0x` prefix.
pub fn format_hex(value: U256) -> String {
    if value.is_zero() {
        return "0x0".to_string();
    }
    format!("0x{:x}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_fixed(U256::one() << 127u32, 127, 0).unwrap(), "1");
        assert_eq!(format_fixed(U256::from(3u64) << 125u32, 125, 3).unwrap(), "3.000");
        assert_eq!(format_fixed(U256::from(1024u64) << 32u32, 32, 2).unwrap(), "1024.00");
    }

    #[test]
    fn test_truncates() {
        let nearly_two = (U256::one() << 128u32) - U256::from(2u64);
        assert_eq!(format_fixed(nearly_two, 127, 5).unwrap(), "1.99999");
        // 2/3 at scale 2^32
        let two_thirds = (U256::from(2u64) << 32u32) / U256::from(3u64);
        assert_eq!(format_fixed(two_thirds, 32, 6).unwrap(), "0.666666");
    }

    #[test]
    fn test_halves() {
        assert_eq!(format_fixed(U256::from(3u64) << 31u32, 32, 4).unwrap(), "1.5000");
        assert_eq!(format_fixed(U256::one(), 1, 1).unwrap(), "0.5");
    }

    #[test]
    fn test_rejects_precision_past_table() {
        assert_eq!(
            format_fixed(U256::MAX, MAX_PRECISION + 1, 3),
            Err(PowerError::InvalidPrecision(MAX_PRECISION + 1))
        );
        assert_eq!(
            format_fixed(U256::MAX, 255, 3),
            Err(PowerError::InvalidPrecision(255))
        );
        let widest = (U256::one() << 128u32) | ((U256::one() << 127u32) - U256::one());
        assert_eq!(format_fixed(widest, MAX_PRECISION, 3).unwrap(), "2.999");
    }

    #[test]
    fn test_hex() {
        assert_eq!(format_hex(U256::from(255u64)), "0xff");
        assert_eq!(format_hex(U256::zero()), "0x0");
    }
}
