use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use codecat::cli::Cli;
use codecat::collect;
use codecat::config::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let report = collect::collect(&config)?;

    info!(
        "wrote {} file(s) to {:?}, {} failure(s)",
        report.files_written,
        config.output,
        report.failures.len()
    );
    Ok(())
}
