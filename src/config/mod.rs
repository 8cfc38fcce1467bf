#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_json_file_name, validate_path, validate_url, Validate};

pub const CHAOS_ENDPOINT: &str = "https://raw.githubusercontent.com/projectdiscovery/public-bugbounty-programs/main/chaos-bugbounty-list.json";
pub const CHAOS_OUTPUT_FILE: &str = "chaos-targets.json";

pub const TRICKEST_ENDPOINT: &str =
    "https://raw.githubusercontent.com/trickest/inventory/main/targets.json";
pub const TRICKEST_OUTPUT_FILE: &str = "trickest-targets.json";

/// Where a provider's inventory comes from and where its rows are written.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub output_dir: String,
    pub output_file: String,
}

impl ProviderConfig {
    pub fn chaos() -> Self {
        Self {
            endpoint: CHAOS_ENDPOINT.to_string(),
            output_dir: ".".to_string(),
            output_file: CHAOS_OUTPUT_FILE.to_string(),
        }
    }

    pub fn trickest() -> Self {
        Self {
            endpoint: TRICKEST_ENDPOINT.to_string(),
            output_dir: ".".to_string(),
            output_file: TRICKEST_OUTPUT_FILE.to_string(),
        }
    }
}

impl ConfigProvider for ProviderConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_json_file_name("output_file", &self.output_file)
    }
}
