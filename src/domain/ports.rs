use crate::domain::model::SnapshotReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn json_output(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Fetch the raw HTML fragment for one reading.
    async fn extract(&self) -> Result<String>;
    /// Parse the fragment into a structured report.
    async fn transform(&self, html: String) -> Result<SnapshotReport>;
    /// Render the report to stdout; returns the rendered string.
    async fn load(&self, report: SnapshotReport) -> Result<String>;
}
