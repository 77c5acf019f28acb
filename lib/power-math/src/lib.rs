//! Integer-only approximation of `(baseN / baseD) ^ (expN / expD)`.
//!
//! The base is taken through a fixed-point `log2` scaled by `2^MAX_PRECISION`,
//! multiplied by the exponent ratio, and fed to a fixed-point `2^x` evaluated at
//! the finest precision level whose overflow bound still admits the input.
//! The result is returned as `(value, precision)` meaning `value / 2^precision`.

mod constants;
mod error;
mod exp;
mod log;
mod power;
mod precision;
mod ratio;
mod table;
mod wide;

pub use constants::*;
pub use error::*;
pub use exp::*;
pub use log::*;
pub use power::*;
pub use precision::*;
pub use ratio::*;
pub use table::*;
pub use wide::*;
