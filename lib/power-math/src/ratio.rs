use std::fmt;
use std::str::FromStr;

use crate::error::{PowerError, Result};
use crate::wide::U256;

/// A non-negative rational `numerator / denominator`.
///
/// Fields are public so callers can build ratios in constant contexts; the
/// formula re-checks the denominator on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    pub numerator: U256,
    pub denominator: U256,
}

impl Ratio {
    pub fn new(numerator: impl Into<U256>, denominator: impl Into<U256>) -> Result<Self> {
        let ratio = Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        };
        ratio.check_denominator()?;
        Ok(ratio)
    }

    pub fn integer(value: impl Into<U256>) -> Self {
        Self {
            numerator: value.into(),
            denominator: U256::one(),
        }
    }

    pub fn check_denominator(&self) -> Result<()> {
        if self.denominator.is_zero() {
            return Err(PowerError::ZeroDenominator);
        }
        Ok(())
    }

    pub fn is_below_one(&self) -> bool {
        self.numerator < self.denominator
    }

    /// Parses both halves with [`parse_uint`].
    pub fn parse(numerator: &str, denominator: &str) -> Result<Self> {
        Self::new(parse_uint(numerator)?, parse_uint(denominator)?)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Accepts `n/d` or a bare integer `n`.
impl FromStr for Ratio {
    type Err = PowerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((numerator, denominator)) => Self::parse(numerator, denominator),
            None => Ok(Self::integer(parse_uint(s)?)),
        }
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal 256-bit integer.
/// Underscores are ignored.
pub fn parse_uint(s: &str) -> Result<U256> {
    let cleaned: String = s.trim().chars().filter(|c| *c != '_').collect();
    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) if !hex.is_empty() => U256::from_str_radix(hex, 16).ok(),
        Some(_) => None,
        None if cleaned.is_empty() => None,
        None => U256::from_dec_str(&cleaned).ok(),
    };
    parsed.ok_or_else(|| PowerError::Parse(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_denominator() {
        assert_eq!(Ratio::new(1u64, 0u64), Err(PowerError::ZeroDenominator));
        assert!(Ratio::new(0u64, 1u64).is_ok());
    }

    #[test]
    fn test_parse_uint_formats() {
        assert_eq!(parse_uint("1000"), Ok(U256::from(1000u64)));
        assert_eq!(parse_uint(" 1_000_000 "), Ok(U256::from(1_000_000u64)));
        assert_eq!(parse_uint("0xff"), Ok(U256::from(255u64)));
        assert_eq!(
            parse_uint("0x1ffffffffffffffffffffffffffffffff"),
            Ok((U256::one() << 129usize) - U256::one())
        );
        assert!(matches!(parse_uint("12a"), Err(PowerError::Parse(_))));
        assert!(matches!(parse_uint("0x"), Err(PowerError::Parse(_))));
        assert!(matches!(parse_uint(""), Err(PowerError::Parse(_))));
    }

    #[test]
    fn test_from_str() {
        let ratio: Ratio = "4/1".parse().unwrap();
        assert_eq!(ratio, Ratio::integer(4u64));
        let ratio: Ratio = "7".parse().unwrap();
        assert_eq!(ratio.denominator, U256::one());
        assert_eq!("3/0".parse::<Ratio>(), Err(PowerError::ZeroDenominator));
        assert_eq!(ratio.to_string(), "7/1");
    }

    #[test]
    fn test_is_below_one() {
        assert!(Ratio::integer(0u64).is_below_one());
        assert!(Ratio::new(2u64, 3u64).unwrap().is_below_one());
        assert!(!Ratio::new(3u64, 3u64).unwrap().is_below_one());
    }
}
