use crate::core::source::fetch_inventory;
use crate::core::writer::to_indented_json;
use crate::core::{
    ConfigProvider, Pipeline, Storage, TrickestInventory, TrickestOutput, TrickestTarget,
};
use crate::utils::error::Result;
use reqwest::Client;
use std::path::Path;

const TREE_ROOT: &str = "https://github.com/trickest/inventory/tree/main";
const RAW_ROOT: &str = "https://raw.githubusercontent.com/trickest/inventory/main";

/// Replaces each space with `%20` and nothing else. The inventory's
/// directory names rely on exactly this form, so no other characters are
/// escaped.
pub fn inventory_token(name: &str) -> String {
    name.replace(' ', "%20")
}

pub fn flatten_targets(targets: Vec<TrickestTarget>) -> Vec<TrickestOutput> {
    let mut outputs = Vec::new();

    for target in targets {
        let token = inventory_token(&target.name);
        let github_url = format!("{}/{}", TREE_ROOT, token);
        let hostnames = format!("{}/{}/hostnames.txt", RAW_ROOT, token);
        let dns_report = format!("{}/{}/dns-report.csv", RAW_ROOT, token);
        let server_report = format!("{}/{}/server-report.csv", RAW_ROOT, token);
        let servers = format!("{}/{}/servers.txt", RAW_ROOT, token);

        for domain in target.domains {
            outputs.push(TrickestOutput {
                domain,
                name: target.name.clone(),
                platform_url: target.url.clone(),
                github_url: github_url.clone(),
                hostnames: hostnames.clone(),
                dns_report: dns_report.clone(),
                server_report: server_report.clone(),
                servers: servers.clone(),
            });
        }
    }

    outputs
}

pub struct TrickestPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> TrickestPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TrickestPipeline<S, C> {
    type Source = TrickestTarget;
    type Output = TrickestOutput;

    async fn extract(&self) -> Result<Vec<TrickestTarget>> {
        tracing::debug!("Fetching Trickest targets from: {}", self.config.endpoint());
        let inventory: TrickestInventory =
            fetch_inventory(&self.client, self.config.endpoint()).await?;
        Ok(inventory.targets)
    }

    fn transform(&self, data: Vec<TrickestTarget>) -> Vec<TrickestOutput> {
        flatten_targets(data)
    }

    async fn load(&self, rows: Vec<TrickestOutput>) -> Result<String> {
        let json_data = to_indented_json(&rows)?;

        tracing::debug!("Writing {} rows to {}", rows.len(), self.config.output_file());
        self.storage
            .write_file(self.config.output_file(), &json_data)
            .await?;

        let output_path = Path::new(self.config.output_dir()).join(self.config.output_file());
        Ok(output_path.display().to_string())
    }
}
