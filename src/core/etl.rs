use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct SnapshotEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SnapshotEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching occupancy data...");
        let html = self.pipeline.extract().await?;
        tracing::info!("Fetched {} bytes of HTML", html.len());

        tracing::info!("Parsing realtime data...");
        let report = self.pipeline.transform(html).await?;

        let rendered = self.pipeline.load(report).await?;
        Ok(rendered)
    }
}
