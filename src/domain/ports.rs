use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn output_file(&self) -> &str;
}

/// Fetch → flatten → write. `transform` never fails.
#[async_trait]
pub trait Pipeline: Send + Sync {
    type Source: Send;
    type Output: Send;

    async fn extract(&self) -> Result<Vec<Self::Source>>;
    fn transform(&self, data: Vec<Self::Source>) -> Vec<Self::Output>;
    async fn load(&self, rows: Vec<Self::Output>) -> Result<String>;
}
