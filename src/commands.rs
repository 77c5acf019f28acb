use crate::format::{format_fixed, format_hex};
use anyhow::{bail, Context, Result};
use power_math::{
    generate_row, levels, max_exp, max_val, parse_uint, power, scaled_exp, scaled_log, Ratio,
    MAX_PRECISION,
};
use std::fmt::Write;
use tracing::{info, warn};

pub fn power_command(base: &Ratio, exponent: &Ratio, digits: usize) -> Result<String> {
    let result = power(base, exponent)
        .with_context(|| format!("Failed to compute ({})^({})", base, exponent))?;
    Ok(format!(
        "value     {}\nprecision {}\nresult    {}",
        format_hex(result.value),
        result.precision,
        format_fixed(result.value, result.precision, digits)?
    ))
}

pub fn log_command(ratio: &Ratio, digits: usize) -> Result<String> {
    let log = scaled_log(ratio).with_context(|| format!("Failed to compute log2({})", ratio))?;
    Ok(format!(
        "value     {}\nprecision {}\nlog2      {}",
        format_hex(log),
        MAX_PRECISION,
        format_fixed(log, MAX_PRECISION, digits)?
    ))
}

pub fn exp_command(x: &str, precision: u8, digits: usize) -> Result<String> {
    let x = parse_uint(x)?;
    let value = scaled_exp(x, precision)
        .with_context(|| format!("Failed to compute 2^({} / 2^{})", x, precision))?;
    Ok(format!(
        "value     {}\nprecision {}\nresult    {}",
        format_hex(value),
        precision,
        format_fixed(value, precision, digits)?
    ))
}

/// Lists every table row; with `verify`, regenerates each row and fails on any mismatch.
pub fn table_command(verify: bool) -> Result<String> {
    let mut out = String::new();
    let mut mismatches = Vec::new();

    for precision in levels() {
        let bound = max_exp(precision)?;
        let value = max_val(precision)?;
        writeln!(out, "{:>3} {} {}", precision, format_hex(bound), format_hex(value))?;

        if verify {
            let (generated_exp, generated_val) = generate_row(precision)?;
            if generated_exp != bound || generated_val != value {
                warn!(
                    "level {}: table has ({}, {}), regenerated ({}, {})",
                    precision,
                    format_hex(bound),
                    format_hex(value),
                    format_hex(generated_exp),
                    format_hex(generated_val)
                );
                mismatches.push(precision);
            }
        }
    }

    if !mismatches.is_empty() {
        bail!("Precision table mismatch at levels {:?}", mismatches);
    }
    if verify {
        info!("All {} precision levels verified", levels().count());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_command_renders_result() {
        let out = power_command(&Ratio::integer(4u64), &Ratio::new(1u64, 2u64).unwrap(), 6).unwrap();
        assert!(out.contains("precision 127"));
        assert!(out.contains("result    2.000000"));
    }

    #[test]
    fn test_power_command_reports_domain_error() {
        let err = power_command(&Ratio::new(1u64, 2u64).unwrap(), &Ratio::integer(1u64), 6).unwrap_err();
        assert!(err.chain().any(|cause| cause.to_string().contains("below one")));
    }

    #[test]
    fn test_log_command() {
        let out = log_command(&Ratio::integer(8u64), 3).unwrap();
        assert!(out.contains("log2      3.000"));
    }

    #[test]
    fn test_exp_command() {
        let out = exp_command("0x80000000000000000000000000000000", 127, 4).unwrap();
        assert!(out.contains("result    2.0000"));
        assert!(exp_command("0x1", 5, 4).is_err());
        assert!(exp_command("nope", 64, 4).is_err());
    }

    #[test]
    fn test_table_command_lists_every_level() {
        let out = table_command(false).unwrap();
        assert_eq!(out.lines().count(), levels().count());
        assert!(out.starts_with(" 32 0x60ffffffff 0x1fffffffd"));
    }
}
