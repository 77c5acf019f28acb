use crate::constants::{LEVELS, MAX_PRECISION, MIN_PRECISION};
use crate::error::{PowerError, Result};
use crate::exp::exp_series;
use crate::wide::{wide, U256};

// Largest input, at scale 2^p, for which the exponential at level p stays
// below MAX_NUM. Row i holds level MIN_PRECISION + i. Regenerate with
// `generate_max_exp`.
pub const MAX_EXP_ARRAY: [u128; LEVELS] = [
    0x00000000_00000000_00000060_ffffffff, // 32
    0x00000000_00000000_000000bf_ffffffff, // 33
    0x00000000_00000000_0000017b_ffffffff, // 34
    0x00000000_00000000_000002ef_ffffffff, // 35
    0x00000000_00000000_000005cf_ffffffff, // 36
    0x00000000_00000000_00000b7f_ffffffff, // 37
    0x00000000_00000000_000016bf_ffffffff, // 38
    0x00000000_00000000_00002cff_ffffffff, // 39
    0x00000000_00000000_000058ff_ffffffff, // 40
    0x00000000_00000000_0000afff_ffffffff, // 41
    0x00000000_00000000_00015bff_ffffffff, // 42
    0x00000000_00000000_0002afff_ffffffff, // 43
    0x00000000_00000000_00054fff_ffffffff, // 44
    0x00000000_00000000_000a7fff_ffffffff, // 45
    0x00000000_00000000_0014bfff_ffffffff, // 46
    0x00000000_00000000_0028ffff_ffffffff, // 47
    0x00000000_00000000_0050ffff_ffffffff, // 48
    0x00000000_00000000_009fffff_ffffffff, // 49
    0x00000000_00000000_013bffff_ffffffff, // 50
    0x00000000_00000000_026fffff_ffffffff, // 51
    0x00000000_00000000_04cfffff_ffffffff, // 52
    0x00000000_00000000_097fffff_ffffffff, // 53
    0x00000000_00000000_12bfffff_ffffffff, // 54
    0x00000000_00000000_24ffffff_ffffffff, // 55
    0x00000000_00000000_48ffffff_ffffffff, // 56
    0x00000000_00000000_8fffffff_ffffffff, // 57
    0x00000000_00000001_1bffffff_ffffffff, // 58
    0x00000000_00000002_2fffffff_ffffffff, // 59
    0x00000000_00000004_4fffffff_ffffffff, // 60
    0x00000000_00000008_7fffffff_ffffffff, // 61
    0x00000000_00000010_bfffffff_ffffffff, // 62
    0x00000000_00000020_ffffffff_ffffffff, // 63
    0x00000000_00000040_ffffffff_ffffffff, // 64
    0x00000000_0000007f_ffffffff_ffffffff, // 65
    0x00000000_000000fb_ffffffff_ffffffff, // 66
    0x00000000_000001ef_ffffffff_ffffffff, // 67
    0x00000000_000003cf_ffffffff_ffffffff, // 68
    0x00000000_0000077f_ffffffff_ffffffff, // 69
    0x00000000_00000ebf_ffffffff_ffffffff, // 70
    0x00000000_00001cff_ffffffff_ffffffff, // 71
    0x00000000_000038ff_ffffffff_ffffffff, // 72
    0x00000000_00006fff_ffffffff_ffffffff, // 73
    0x00000000_0000dbff_ffffffff_ffffffff, // 74
    0x00000000_0001afff_ffffffff_ffffffff, // 75
    0x00000000_00034fff_ffffffff_ffffffff, // 76
    0x00000000_00067fff_ffffffff_ffffffff, // 77
    0x00000000_000cbfff_ffffffff_ffffffff, // 78
    0x00000000_0018ffff_ffffffff_ffffffff, // 79
    0x00000000_0030ffff_ffffffff_ffffffff, // 80
    0x00000000_005fffff_ffffffff_ffffffff, // 81
    0x00000000_00bbffff_ffffffff_ffffffff, // 82
    0x00000000_016fffff_ffffffff_ffffffff, // 83
    0x00000000_02cfffff_ffffffff_ffffffff, // 84
    0x00000000_057fffff_ffffffff_ffffffff, // 85
    0x00000000_0abfffff_ffffffff_ffffffff, // 86
    0x00000000_14ffffff_ffffffff_ffffffff, // 87
    0x00000000_28ffffff_ffffffff_ffffffff, // 88
    0x00000000_4fffffff_ffffffff_ffffffff, // 89
    0x00000000_9bffffff_ffffffff_ffffffff, // 90
    0x00000001_2fffffff_ffffffff_ffffffff, // 91
    0x00000002_4fffffff_ffffffff_ffffffff, // 92
    0x00000004_7fffffff_ffffffff_ffffffff, // 93
    0x00000008_bfffffff_ffffffff_ffffffff, // 94
    0x00000010_ffffffff_ffffffff_ffffffff, // 95
    0x00000020_ffffffff_ffffffff_ffffffff, // 96
    0x0000003f_ffffffff_ffffffff_ffffffff, // 97
    0x0000007b_ffffffff_ffffffff_ffffffff, // 98
    0x000000ef_ffffffff_ffffffff_ffffffff, // 99
    0x000001cf_ffffffff_ffffffff_ffffffff, // 100
    0x0000037f_ffffffff_ffffffff_ffffffff, // 101
    0x000006bf_ffffffff_ffffffff_ffffffff, // 102
    0x00000cff_ffffffff_ffffffff_ffffffff, // 103
    0x000018ff_ffffffff_ffffffff_ffffffff, // 104
    0x00002fff_ffffffff_ffffffff_ffffffff, // 105
    0x00005bff_ffffffff_ffffffff_ffffffff, // 106
    0x0000afff_ffffffff_ffffffff_ffffffff, // 107
    0x00014fff_ffffffff_ffffffff_ffffffff, // 108
    0x00027fff_ffffffff_ffffffff_ffffffff, // 109
    0x0004bfff_ffffffff_ffffffff_ffffffff, // 110
    0x0008ffff_ffffffff_ffffffff_ffffffff, // 111
    0x0010ffff_ffffffff_ffffffff_ffffffff, // 112
    0x001fffff_ffffffff_ffffffff_ffffffff, // 113
    0x003bffff_ffffffff_ffffffff_ffffffff, // 114
    0x006fffff_ffffffff_ffffffff_ffffffff, // 115
    0x00cfffff_ffffffff_ffffffff_ffffffff, // 116
    0x017fffff_ffffffff_ffffffff_ffffffff, // 117
    0x02bfffff_ffffffff_ffffffff_ffffffff, // 118
    0x04ffffff_ffffffff_ffffffff_ffffffff, // 119
    0x08ffffff_ffffffff_ffffffff_ffffffff, // 120
    0x0fffffff_ffffffff_ffffffff_ffffffff, // 121
    0x1bffffff_ffffffff_ffffffff_ffffffff, // 122
    0x2fffffff_ffffffff_ffffffff_ffffffff, // 123
    0x4fffffff_ffffffff_ffffffff_ffffffff, // 124
    0x7fffffff_ffffffff_ffffffff_ffffffff, // 125
    0xbfffffff_ffffffff_ffffffff_ffffffff, // 126
    0xffffffff_ffffffff_ffffffff_ffffffff, // 127
];

// Value of the exponential at the matching MAX_EXP_ARRAY entry.
pub const MAX_VAL_ARRAY: [U256; LEVELS] = [
    wide(0x1, 0xfffffffd_00000000_00000000_00000000), // 32
    wide(0x1, 0xfffffffe_00000000_00000000_00000000), // 33
    wide(0x1, 0xffffffff_40000000_00000000_00000000), // 34
    wide(0x1, 0xffffffff_80000000_00000000_00000000), // 35
    wide(0x1, 0xffffffff_d0000000_00000000_00000000), // 36
    wide(0x1, 0xffffffff_e0000000_00000000_00000000), // 37
    wide(0x1, 0xffffffff_f0000000_00000000_00000000), // 38
    wide(0x1, 0xffffffff_fa000000_00000000_00000000), // 39
    wide(0x1, 0xffffffff_fd000000_00000000_00000000), // 40
    wide(0x1, 0xffffffff_fd800000_00000000_00000000), // 41
    wide(0x1, 0xffffffff_ff400000_00000000_00000000), // 42
    wide(0x1, 0xffffffff_ff800000_00000000_00000000), // 43
    wide(0x1, 0xffffffff_ffd00000_00000000_00000000), // 44
    wide(0x1, 0xffffffff_ffe80000_00000000_00000000), // 45
    wide(0x1, 0xffffffff_fff40000_00000000_00000000), // 46
    wide(0x1, 0xffffffff_fffc0000_00000000_00000000), // 47
    wide(0x1, 0xffffffff_fffc0000_00000000_00000000), // 48
    wide(0x1, 0xffffffff_fffe8000_00000000_00000000), // 49
    wide(0x1, 0xffffffff_ffff4000_00000000_00000000), // 50
    wide(0x1, 0xffffffff_ffffa000_00000000_00000000), // 51
    wide(0x1, 0xffffffff_ffffc000_00000000_00000000), // 52
    wide(0x1, 0xffffffff_ffffe800_00000000_00000000), // 53
    wide(0x1, 0xffffffff_fffff000_00000000_00000000), // 54
    wide(0x1, 0xffffffff_fffffc00_00000000_00000000), // 55
    wide(0x1, 0xffffffff_fffffc00_00000000_00000000), // 56
    wide(0x1, 0xffffffff_fffffe00_00000000_00000000), // 57
    wide(0x1, 0xffffffff_ffffff00_00000000_00000000), // 58
    wide(0x1, 0xffffffff_ffffff80_00000000_00000000), // 59
    wide(0x1, 0xffffffff_ffffffe0_00000000_00000000), // 60
    wide(0x1, 0xffffffff_ffffffe0_00000000_00000000), // 61
    wide(0x1, 0xffffffff_fffffff4_00000000_00000000), // 62
    wide(0x1, 0xffffffff_fffffffa_00000000_00000000), // 63
    wide(0x1, 0xffffffff_fffffffd_00000000_00000000), // 64
    wide(0x1, 0xffffffff_fffffffe_00000000_00000000), // 65
    wide(0x1, 0xffffffff_ffffffff_40000000_00000000), // 66
    wide(0x1, 0xffffffff_ffffffff_a0000000_00000000), // 67
    wide(0x1, 0xffffffff_ffffffff_c0000000_00000000), // 68
    wide(0x1, 0xffffffff_ffffffff_e0000000_00000000), // 69
    wide(0x1, 0xffffffff_ffffffff_f0000000_00000000), // 70
    wide(0x1, 0xffffffff_ffffffff_fa000000_00000000), // 71
    wide(0x1, 0xffffffff_ffffffff_fd000000_00000000), // 72
    wide(0x1, 0xffffffff_ffffffff_fe800000_00000000), // 73
    wide(0x1, 0xffffffff_ffffffff_ff000000_00000000), // 74
    wide(0x1, 0xffffffff_ffffffff_ffa00000_00000000), // 75
    wide(0x1, 0xffffffff_ffffffff_ffc00000_00000000), // 76
    wide(0x1, 0xffffffff_ffffffff_ffe00000_00000000), // 77
    wide(0x1, 0xffffffff_ffffffff_fff40000_00000000), // 78
    wide(0x1, 0xffffffff_ffffffff_fffc0000_00000000), // 79
    wide(0x1, 0xffffffff_ffffffff_fffd0000_00000000), // 80
    wide(0x1, 0xffffffff_ffffffff_fffe0000_00000000), // 81
    wide(0x1, 0xffffffff_ffffffff_ffff4000_00000000), // 82
    wide(0x1, 0xffffffff_ffffffff_ffff8000_00000000), // 83
    wide(0x1, 0xffffffff_ffffffff_ffffd000_00000000), // 84
    wide(0x1, 0xffffffff_ffffffff_ffffe000_00000000), // 85
    wide(0x1, 0xffffffff_ffffffff_fffff400_00000000), // 86
    wide(0x1, 0xffffffff_ffffffff_fffffa00_00000000), // 87
    wide(0x1, 0xffffffff_ffffffff_fffffc00_00000000), // 88
    wide(0x1, 0xffffffff_ffffffff_fffffe80_00000000), // 89
    wide(0x1, 0xffffffff_ffffffff_ffffff40_00000000), // 90
    wide(0x1, 0xffffffff_ffffffff_ffffffa0_00000000), // 91
    wide(0x1, 0xffffffff_ffffffff_ffffffc0_00000000), // 92
    wide(0x1, 0xffffffff_ffffffff_ffffffe8_00000000), // 93
    wide(0x1, 0xffffffff_ffffffff_fffffff4_00000000), // 94
    wide(0x1, 0xffffffff_ffffffff_fffffffa_00000000), // 95
    wide(0x1, 0xffffffff_ffffffff_fffffffd_00000000), // 96
    wide(0x1, 0xffffffff_ffffffff_fffffffe_80000000), // 97
    wide(0x1, 0xffffffff_ffffffff_ffffffff_40000000), // 98
    wide(0x1, 0xffffffff_ffffffff_ffffffff_a0000000), // 99
    wide(0x1, 0xffffffff_ffffffff_ffffffff_d0000000), // 100
    wide(0x1, 0xffffffff_ffffffff_ffffffff_e0000000), // 101
    wide(0x1, 0xffffffff_ffffffff_ffffffff_f4000000), // 102
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fa000000), // 103
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fd000000), // 104
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fe800000), // 105
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ff800000), // 106
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ff800000), // 107
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ffd00000), // 108
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ffe00000), // 109
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fff80000), // 110
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fff80000), // 111
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fffd0000), // 112
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fffe8000), // 113
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ffff4000), // 114
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ffffa000), // 115
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ffffc000), // 116
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ffffe800), // 117
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fffff000), // 118
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fffff800), // 119
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fffffb00), // 120
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fffffe00), // 121
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ffffff40), // 122
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ffffff80), // 123
    wide(0x1, 0xffffffff_ffffffff_ffffffff_ffffffd0), // 124
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fffffff0), // 125
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fffffff4), // 126
    wide(0x1, 0xffffffff_ffffffff_ffffffff_fffffff8), // 127
];

/// Every level of the table, coarsest first.
pub fn levels() -> impl DoubleEndedIterator<Item = u8> {
    MIN_PRECISION..=MAX_PRECISION
}

fn row(precision: u8) -> Result<usize> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(PowerError::InvalidPrecision(precision));
    }
    Ok((precision - MIN_PRECISION) as usize)
}

pub fn max_exp(precision: u8) -> Result<U256> {
    Ok(U256::from(MAX_EXP_ARRAY[row(precision)?]))
}

pub fn max_val(precision: u8) -> Result<U256> {
    Ok(MAX_VAL_ARRAY[row(precision)?])
}

/// Recomputes `MAX_EXP_ARRAY[precision]` by binary search over the raw exponential.
///
/// Overflow is monotone in the input, so the search is exact.
/// Bounded by 256 halvings of the full 256-bit range.
pub fn generate_max_exp(precision: u8) -> Result<U256> {
    row(precision)?;
    let fits = |x: U256| exp_series(x, precision).is_ok();

    let mut lo = U256::zero();
    let mut hi = U256::MAX;
    while lo + U256::one() < hi {
        let mid = lo + ((hi - lo) >> 1u32);
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    if fits(hi) {
        return Ok(hi);
    }
    Ok(lo)
}

/// Recomputes the `(max_exp, max_val)` row of a level.
pub fn generate_row(precision: u8) -> Result<(U256, U256)> {
    let max_exp = generate_max_exp(precision)?;
    let max_val = exp_series(max_exp, precision)?;
    Ok((max_exp, max_val))
}
