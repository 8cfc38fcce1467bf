use crate::core::source::fetch_inventory;
use crate::core::writer::to_indented_json;
use crate::core::{ChaosInventory, ChaosProgram, ChaosTarget, ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use reqwest::Client;
use std::path::Path;

const ARCHIVE_HOST: &str = "https://chaos-data.projectdiscovery.io";

/// 小寫後把空白換成底線，例如 `"My Program"` -> `"my_program"`
///
/// Lowercasing maps one character at a time, so a trailing `Σ` becomes `σ`
/// rather than the word-final `ς`.
pub fn archive_token(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .replace(' ', "_")
}

pub fn archive_url(name: &str) -> String {
    format!("{}/{}.zip", ARCHIVE_HOST, archive_token(name))
}

/// One row per (program, domain), in source order.
pub fn flatten_programs(programs: Vec<ChaosProgram>) -> Vec<ChaosTarget> {
    let mut outputs = Vec::new();

    for program in programs {
        let zip = archive_url(&program.name);

        for domain in program.domains {
            outputs.push(ChaosTarget {
                domain,
                name: program.name.clone(),
                platform_url: program.url.clone(),
                zip: zip.clone(),
            });
        }
    }

    outputs
}

/// ProjectDiscovery Chaos 的 bug bounty 清單
pub struct ChaosPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ChaosPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ChaosPipeline<S, C> {
    type Source = ChaosProgram;
    type Output = ChaosTarget;

    async fn extract(&self) -> Result<Vec<ChaosProgram>> {
        tracing::debug!("Fetching Chaos programs from: {}", self.config.endpoint());
        let inventory: ChaosInventory =
            fetch_inventory(&self.client, self.config.endpoint()).await?;
        Ok(inventory.programs)
    }

    fn transform(&self, data: Vec<ChaosProgram>) -> Vec<ChaosTarget> {
        flatten_programs(data)
    }

    async fn load(&self, rows: Vec<ChaosTarget>) -> Result<String> {
        let json_data = to_indented_json(&rows)?;

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            rows.len(),
            json_data.len(),
            self.config.output_file()
        );
        self.storage
            .write_file(self.config.output_file(), &json_data)
            .await?;

        let output_path = Path::new(self.config.output_dir()).join(self.config.output_file());
        Ok(output_path.display().to_string())
    }
}
