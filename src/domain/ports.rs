use crate::domain::model::{ElectionType, ResultRow};
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
    fn base_url(&self) -> String;
    fn output_path(&self) -> &str;
    fn year(&self) -> &str;
    fn valgtype(&self) -> ElectionType;
}

#[async_trait]
pub trait Harvest: Send + Sync {
    async fn fetch_results(&self, year: &str, valgtype: ElectionType) -> Result<Vec<ResultRow>>;
}
