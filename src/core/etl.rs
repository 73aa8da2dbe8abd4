use crate::core::{DisplaySummary, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<DisplaySummary> {
        tracing::info!("Fetching owners...");
        let owners = self.pipeline.extract().await?;
        tracing::info!("Extracted {} owners", owners.len());

        let pairs = self.pipeline.transform(owners).await?;
        tracing::info!("Found {} cats", pairs.len());

        let summary = self.pipeline.load(pairs).await?;
        tracing::info!(
            "Printed {} cats under {} gender groups",
            summary.cats,
            summary.genders
        );

        Ok(summary)
    }
}
