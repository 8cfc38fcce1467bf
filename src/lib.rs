pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, LocalStorage};

pub use app::pipelines::{ChaosPipeline, TrickestPipeline};
pub use config::ProviderConfig;
pub use core::etl::EtlEngine;
pub use utils::error::{EtlError, Result};
