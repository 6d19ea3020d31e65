//! Command line and environment configuration.

use crate::error::{Error, Result};
use crate::harness::Strategy;
use crate::output::OutputFormat;
use clap::{ArgAction, Parser};

/// Trials per variant when nothing else is requested.
pub const DEFAULT_TOTAL: u64 = 600_000_000;

/// Estimate Pi by Monte Carlo sampling under five concurrency strategies
#[derive(Parser, Debug)]
#[command(name = "monte_carlo_pi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Total trials per strategy
    #[arg(short = 'n', long, env = "MC_PI_TOTAL", default_value_t = DEFAULT_TOTAL)]
    pub total: u64,

    /// Workers for the partitioned strategies (defaults to logical processor count)
    #[arg(short, long, env = "MC_PI_WORKERS")]
    pub workers: Option<usize>,

    /// Run seed; drawn from OS entropy when omitted
    #[arg(long, env = "MC_PI_SEED")]
    pub seed: Option<u64>,

    /// Strategies to run, in order (repeatable; defaults to all five)
    #[arg(short, long = "strategy", value_enum)]
    pub strategies: Vec<Strategy>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Strategies in run order.
    pub fn strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategies.clone()
        }
    }

    pub fn run_config(&self, processors: usize) -> Result<RunConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);
        RunConfig::new(self.total, self.workers.unwrap_or(processors), seed)
    }
}

/// Validated parameters shared by every harness in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub total: u64,
    pub workers: usize,
    pub seed: u64,
}

impl RunConfig {
    pub fn new(total: u64, workers: usize, seed: u64) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidConfig("workers must be at least 1".into()));
        }
        Ok(Self {
            total,
            workers,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["monte_carlo_pi"]).unwrap();
        assert_eq!(cli.total, DEFAULT_TOTAL);
        assert_eq!(cli.strategies(), Strategy::ALL.to_vec());
        assert_eq!(cli.format, OutputFormat::Text);

        let config = cli.run_config(8).unwrap();
        assert_eq!(config.workers, 8);
    }

    #[test]
    fn test_explicit_values() {
        let cli = Cli::try_parse_from([
            "monte_carlo_pi",
            "-n",
            "1000",
            "-w",
            "3",
            "--seed",
            "9",
            "-s",
            "cooperative",
            "-s",
            "sequential",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.strategies(), vec![Strategy::Cooperative, Strategy::Sequential]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.run_config(16).unwrap(), RunConfig::new(1000, 3, 9).unwrap());
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(matches!(RunConfig::new(10, 0, 1), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_total_allowed() {
        assert!(RunConfig::new(0, 4, 1).is_ok());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["monte_carlo_pi", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
