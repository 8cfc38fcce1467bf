use crate::config::cli::LocalStorage;
use crate::config::ProviderConfig;
use crate::core::etl::EtlEngine;
use crate::core::Pipeline;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;

/// Validates `config`, builds the provider pipeline over local storage and
/// runs it once.
pub async fn run_provider<P, F>(config: ProviderConfig, build: F) -> Result<String>
where
    P: Pipeline,
    F: FnOnce(LocalStorage, ProviderConfig) -> P,
{
    config.validate()?;
    tracing::debug!("Provider config: {:?}", config);

    let output_file = config.output_file.clone();
    let storage = LocalStorage::new(config.output_dir.clone());
    let engine = EtlEngine::new(build(storage, config));

    engine.run().await?;
    Ok(output_file)
}

/// Prints a single diagnostic line to stderr and exits non-zero. The
/// category and recovery hint are only visible with `--verbose`.
pub fn exit_with(e: &EtlError) -> ! {
    tracing::debug!(
        "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
