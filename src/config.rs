use anyhow::{Context, Result};
use power_math::{PowerError, PowerResult, Ratio};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub queries: Vec<QueryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Fractional digits printed for `value / 2^precision`.
    #[serde(default = "default_digits")]
    pub digits: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            digits: default_digits(),
        }
    }
}

fn default_digits() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    pub name: String,
    /// `[numerator, denominator]`, decimal or 0x-prefixed hex.
    pub base: [String; 2],
    pub exponent: [String; 2],
    pub expect: Option<Expectation>,
}

impl QueryConfig {
    pub fn base_ratio(&self) -> Result<Ratio, PowerError> {
        Ratio::parse(&self.base[0], &self.base[1])
    }

    pub fn exponent_ratio(&self) -> Result<Ratio, PowerError> {
        Ratio::parse(&self.exponent[0], &self.exponent[1])
    }
}

/// Outcome a batch query is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expectation {
    #[serde(rename = "ok")]
    Success,
    ZeroDenominator,
    ZeroBase,
    BaseBelowOne,
    BaseTooLarge,
    ExponentTooLarge,
}

impl Expectation {
    pub fn matches(&self, outcome: &Result<PowerResult, PowerError>) -> bool {
        match (self, outcome) {
            (Self::Success, Ok(_)) => true,
            (_, Ok(_)) | (Self::Success, Err(_)) => false,
            (expected, Err(error)) => expected.kind() == error.kind(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::ZeroDenominator => PowerError::ZeroDenominator.kind(),
            Self::ZeroBase => PowerError::ZeroBase.kind(),
            Self::BaseBelowOne => PowerError::BaseBelowOne.kind(),
            Self::BaseTooLarge => PowerError::BaseTooLarge.kind(),
            Self::ExponentTooLarge => PowerError::ExponentInputTooLarge.kind(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path))?;
        Self::parse(&contents).with_context(|| format!("Invalid config file {}", path))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("Failed to parse TOML")?;
        Ok(config)
    }
}
