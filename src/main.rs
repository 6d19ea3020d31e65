use anyhow::{Context, Result};
use log::info;
use monte_carlo_pi::aggregate::AggregateState;
use monte_carlo_pi::config::Cli;
use monte_carlo_pi::harness;
use monte_carlo_pi::output::ReportWriter;
use std::io;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let processors = num_cpus::get();
    let config = cli
        .run_config(processors)
        .context("Configuration validation failed")?;
    info!(
        "total={} workers={} seed={}",
        config.total, config.workers, config.seed
    );

    let mut writer = ReportWriter::new(io::stdout().lock(), cli.format);
    writer.processors(processors)?;

    let state = AggregateState::new();
    for strategy in cli.strategies() {
        let report = harness::run(strategy, &config, &state)
            .with_context(|| format!("{strategy} run failed"))?;
        writer.report(&report)?;
    }

    Ok(())
}
