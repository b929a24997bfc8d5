use anyhow::Context;
use clap::Parser;
use profile_card::utils::logger;
use profile_card::{CliConfig, Engine, RecordBuilder, StdoutSink};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting profile-card");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let engine = Engine::new(RecordBuilder::new(), StdoutSink::new());

    let line = engine
        .run()
        .context("failed to build or emit the record")?;

    tracing::info!("✅ Record emitted ({} bytes)", line.len());

    Ok(())
}
