use crate::wide::{wide, U256};

/// Coarsest level of the precision table.
pub const MIN_PRECISION: u8 = 32;

/// Finest level of the precision table, and the scale of every logarithm.
pub const MAX_PRECISION: u8 = 127;

/// Number of rows in the precision table.
pub const LEVELS: usize = (MAX_PRECISION - MIN_PRECISION + 1) as usize;

/// 1.0 at scale 2^MAX_PRECISION.
pub const FIXED_1: U256 = wide(0, 1 << 127);

/// 2.0 at scale 2^MAX_PRECISION.
pub const FIXED_2: U256 = wide(1, 0);

/// Exclusive upper bound on a base numerator: 2^(256 - MAX_PRECISION).
pub const MAX_NUM: U256 = wide(2, 0);

/// floor(ln(2) * 2^128)
pub const LN2: u128 = 0xb17217f7_d1cf79ab_c9e3b398_03f2f6af;
