use crate::core::decode::decode_owners;
use crate::core::fetch::{build_client, fetch_owners_json, resource_url};
use crate::core::present::{render, summarize};
use crate::core::transform::sort_gender_and_cats;
use crate::core::{ConfigProvider, DisplaySummary, Owner, OwnerGenderAndCat, Pipeline, Sink};
use crate::utils::error::Result;
use reqwest::Client;

pub struct CatsPipeline<S: Sink, C: ConfigProvider> {
    sink: S,
    config: C,
    client: Client,
}

impl<S: Sink, C: ConfigProvider> CatsPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Result<Self> {
        let client = build_client(config.request_timeout())?;
        Ok(Self {
            sink,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Sink, C: ConfigProvider> Pipeline for CatsPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Owner>> {
        let url = resource_url(self.config.base_url(), self.config.resource_path())?;

        match fetch_owners_json(&self.client, url).await? {
            Some(body) => decode_owners(&body),
            None => Ok(Vec::new()),
        }
    }

    async fn transform(&self, owners: Vec<Owner>) -> Result<Vec<OwnerGenderAndCat>> {
        Ok(sort_gender_and_cats(&owners))
    }

    async fn load(&self, pairs: Vec<OwnerGenderAndCat>) -> Result<DisplaySummary> {
        let text = render(&pairs);
        if !text.is_empty() {
            self.sink.write_output(&text).await?;
        }
        Ok(summarize(&pairs))
    }
}
