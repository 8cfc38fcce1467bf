use bounty_targets::app::runner::{exit_with, run_provider};
use bounty_targets::utils::logger;
use bounty_targets::{ChaosPipeline, CliArgs, ProviderConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    tracing::debug!("Starting chaos-targets");

    match run_provider(ProviderConfig::chaos(), ChaosPipeline::new).await {
        Ok(output_file) => {
            tracing::debug!("✅ ETL process completed successfully!");
            println!("JSON data has been written to {}", output_file);
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}
