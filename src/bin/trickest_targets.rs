use bounty_targets::app::runner::{exit_with, run_provider};
use bounty_targets::utils::logger;
use bounty_targets::{CliArgs, ProviderConfig, TrickestPipeline};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    tracing::debug!("Starting trickest-targets");

    match run_provider(ProviderConfig::trickest(), TrickestPipeline::new).await {
        Ok(output_file) => {
            tracing::debug!("✅ ETL process completed successfully!");
            println!("JSON data has been written to {}", output_file);
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}
