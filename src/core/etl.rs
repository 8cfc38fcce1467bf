use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs Extract → Transform → Load once. The first failing stage ends
    /// the run and nothing after it executes.
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Starting ETL process...");

        // Extract
        tracing::debug!("Extracting data...");
        let source_records = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} records", source_records.len());

        // Transform
        tracing::debug!("Transforming data...");
        let rows = self.pipeline.transform(source_records);
        tracing::debug!("Transformed into {} rows", rows.len());

        // Load
        tracing::debug!("Loading data...");
        let output_path = self.pipeline.load(rows).await?;
        tracing::debug!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
