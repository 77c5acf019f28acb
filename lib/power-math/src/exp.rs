use crate::constants::{LN2, MAX_NUM};
use crate::error::{PowerError, Result};
use crate::table::max_exp;
use crate::wide::{checked_add, checked_mul, narrow, wide_mul, U256};

// 33! / k! for k = 2..=33, the Taylor coefficients of e^z over a common
// denominator of 33!.
const EXP_COEFFICIENTS: [u128; 32] = [
    0x03442c4e_6074a82f_1797f72a_c0000000, // 33! / 2!
    0x0116b96f_757c380f_b287fd0e_40000000, // 33! / 3!
    0x0045ae5b_dd5f0e03_eca1ff43_90000000, // 33! / 4!
    0x000defab_f91302cd_95b9ffda_50000000, // 33! / 5!
    0x0002529c_a9832b22_439efff9_b8000000, // 33! / 6!
    0x000054f1_cf12bd04_e516b6da_88000000, // 33! / 7!
    0x00000a9e_39e257a0_9ca2d6db_51000000, // 33! / 8!
    0x0000012e_066e7b83_9fa050c3_09000000, // 33! / 9!
    0x0000001e_33d7d926_c329a1ad_1a800000, // 33! / 10!
    0x00000002_bee513bd_b4a6b19b_5f800000, // 33! / 11!
    0x00000000_3a9316fa_79b88ecc_f2a00000, // 33! / 12!
    0x00000000_048177eb_e1fa8123_75200000, // 33! / 13!
    0x00000000_005263fe_90242dcb_acf00000, // 33! / 14!
    0x00000000_00057e22_099c030d_94100000, // 33! / 15!
    0x00000000_000057e2_2099c030_d9410000, // 33! / 16!
    0x00000000_0000052b_6b545699_76310000, // 33! / 17!
    0x00000000_00000049_85f67696_bf748000, // 33! / 18!
    0x00000000_00000003_dea12ea9_9e498000, // 33! / 19!
    0x00000000_00000000_31880f22_14b6e000, // 33! / 20!
    0x00000000_00000000_025bcff5_6eb36000, // 33! / 21!
    0x00000000_00000000_001b722e_10ab1000, // 33! / 22!
    0x00000000_00000000_0001317c_70077000, // 33! / 23!
    0x00000000_00000000_00000cba_84aafa00, // 33! / 24!
    0x00000000_00000000_00000082_573a0a00, // 33! / 25!
    0x00000000_00000000_00000005_035ad900, // 33! / 26!
    0x00000000_00000000_00000000_2f881b00, // 33! / 27!
    0x00000000_00000000_00000000_01b29340, // 33! / 28!
    0x00000000_00000000_00000000_000efc40, // 33! / 29!
    0x00000000_00000000_00000000_00007fe0, // 33! / 30!
    0x00000000_00000000_00000000_00000420, // 33! / 31!
    0x00000000_00000000_00000000_00000021, // 33! / 32!
    0x00000000_00000000_00000000_00000001, // 33! / 33!
];

const EXP_DENOMINATOR: u128 = 0x0688589c_c0e9505e_2f2fee55_80000000; // 33!

/// `e^(fraction * ln 2)` at scale `2^precision`, for `fraction < 2^precision`.
///
/// `z = fraction * ln 2` stays below 0.7, where the degree-33 Taylor polynomial
/// is accurate to far more bits than any level keeps. Every step rounds down.
fn fraction_exp(fraction: U256, precision: u8) -> Result<U256> {
    let z = narrow(wide_mul(fraction, U256::from(LN2)) >> 128u32)?;

    let mut term = z;
    let mut sum = U256::zero();
    for coefficient in EXP_COEFFICIENTS {
        term = checked_mul(term, z)? >> precision;
        sum = checked_add(sum, checked_mul(term, U256::from(coefficient))?)?;
    }

    let one = U256::one() << precision;
    checked_add(checked_add(sum / U256::from(EXP_DENOMINATOR), z)?, one)
}

/// Evaluates `2^(x / 2^precision) * 2^precision` with no range check on `x`.
///
/// The integer part of the exponent is applied as an exact shift, so only the
/// fraction goes through the series and the result is below the true value by
/// less than one part in `2^(precision - 2)`. Results stay below `MAX_NUM`;
/// an input whose result would reach it fails with `ArithmeticOverflow`.
pub(crate) fn exp_series(x: U256, precision: u8) -> Result<U256> {
    let whole = x >> precision;
    let fraction = x & ((U256::one() << precision) - U256::one());
    let reduced = fraction_exp(fraction, precision)?;

    let headroom = (MAX_NUM.bits() - 1)
        .checked_sub(reduced.bits())
        .ok_or(PowerError::ArithmeticOverflow)?;
    if whole > U256::from(headroom as u64) {
        return Err(PowerError::ArithmeticOverflow);
    }
    Ok(reduced << whole.as_usize())
}

/// Fixed-point `2^(x / 2^precision)`, scaled by `2^precision`.
///
/// Never above the true value, and below it by less than one part in
/// `2^(precision - 2)`: at least 30 correct bits on the coarsest level.
///
/// Fails with `ExponentInputTooLarge` when `x` is above the table bound for
/// `precision`, and with `InvalidPrecision` for a level outside the table.
pub fn scaled_exp(x: U256, precision: u8) -> Result<U256> {
    if x > max_exp(precision)? {
        return Err(PowerError::ExponentInputTooLarge);
    }
    exp_series(x, precision)
}
