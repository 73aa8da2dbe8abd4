use crate::domain::model::{DisplaySummary, Owner, OwnerGenderAndCat};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Sink: Send + Sync {
    fn write_output(&self, text: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn resource_path(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Owner>>;
    async fn transform(&self, owners: Vec<Owner>) -> Result<Vec<OwnerGenderAndCat>>;
    async fn load(&self, pairs: Vec<OwnerGenderAndCat>) -> Result<DisplaySummary>;
}
