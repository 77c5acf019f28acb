use anyhow::Result;
use clap::{Parser, Subcommand};
use power_formula::commands::{exp_command, log_command, power_command, table_command};
use power_formula::runner::run_batch;
use power_math::Ratio;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(name = "power-formula", version, about = "Integer-only fixed-point power formula")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute (BASE_N / BASE_D) ^ (EXP_N / EXP_D)
    Power {
        base_n: String,
        base_d: String,
        exp_n: String,
        exp_d: String,
        /// Fractional digits to print
        #[clap(long, default_value = "20")]
        digits: usize,
    },
    /// Compute log2(N / D) scaled by 2^127
    Log {
        numerator: String,
        denominator: String,
        #[clap(long, default_value = "20")]
        digits: usize,
    },
    /// Compute 2^(X / 2^PRECISION) scaled by 2^PRECISION
    Exp {
        x: String,
        precision: u8,
        #[clap(long, default_value = "20")]
        digits: usize,
    },
    /// Print the precision table
    Table {
        /// Regenerate every row and compare against the compiled-in table
        #[clap(long)]
        verify: bool,
    },
    /// Evaluate the queries listed in a TOML file
    Batch { config: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Power {
            base_n,
            base_d,
            exp_n,
            exp_d,
            digits,
        } => {
            let base = Ratio::parse(&base_n, &base_d)?;
            let exponent = Ratio::parse(&exp_n, &exp_d)?;
            println!("{}", power_command(&base, &exponent, digits)?);
        }
        Command::Log {
            numerator,
            denominator,
            digits,
        } => {
            let ratio = Ratio::parse(&numerator, &denominator)?;
            println!("{}", log_command(&ratio, digits)?);
        }
        Command::Exp {
            x,
            precision,
            digits,
        } => println!("{}", exp_command(&x, precision, digits)?),
        Command::Table { verify } => print!("{}", table_command(verify)?),
        Command::Batch { config } => {
            let report = run_batch(&config)?;
            info!("{} queries passed", report.outcomes.len());
        }
    }
    Ok(())
}
