use crate::config::{Config, Expectation, QueryConfig};
use crate::format::format_fixed;
use power_math::{power, PowerError, PowerResult};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("{failed} of {total} queries did not match their expectation")]
    ExpectationMismatch { failed: usize, total: usize },
}

#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub name: String,
    pub result: Result<PowerResult, PowerError>,
    pub expect: Option<Expectation>,
}

impl QueryOutcome {
    /// A query without an expectation always passes.
    pub fn passed(&self) -> bool {
        self.expect
            .map_or(true, |expect| expect.matches(&self.result))
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<QueryOutcome>,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &QueryOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    pub fn check(&self) -> Result<(), BatchError> {
        let failed = self.failures().count();
        if failed > 0 {
            return Err(BatchError::ExpectationMismatch {
                failed,
                total: self.outcomes.len(),
            });
        }
        Ok(())
    }
}

fn evaluate(query: &QueryConfig) -> Result<PowerResult, PowerError> {
    let base = query.base_ratio()?;
    let exponent = query.exponent_ratio()?;
    power(&base, &exponent)
}

/// Evaluates every query of `config`, logging each outcome.
pub fn run_queries(config: &Config) -> BatchReport {
    let digits = config.output.digits;
    let mut report = BatchReport::default();

    for query in &config.queries {
        let result = evaluate(query);
        match &result {
            Ok(value) => match format_fixed(value.value, value.precision, digits) {
                Ok(rendered) => info!(
                    "{}: {} (value {}, precision {})",
                    query.name, rendered, value.value, value.precision
                ),
                Err(e) => warn!("{}: value {} not rendered: {}", query.name, value.value, e),
            },
            Err(e) => warn!("{}: {}", query.name, e),
        }

        let outcome = QueryOutcome {
            name: query.name.clone(),
            result,
            expect: query.expect,
        };
        if !outcome.passed() {
            error!(
                "{}: expected {}",
                outcome.name,
                outcome.expect.map_or("ok", |expect| expect.kind())
            );
        }
        report.outcomes.push(outcome);
    }

    report
}

pub fn run_batch(config_path: &str) -> anyhow::Result<BatchReport> {
    let config = Config::load(config_path)?;
    info!("Configuration loaded successfully");
    info!("Evaluating {} queries", config.queries.len());

    let report = run_queries(&config);
    report.check()?;
    Ok(report)
}
