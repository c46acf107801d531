use crate::core::{extract, parser};
use crate::core::{ConfigProvider, Pipeline, SnapshotReport};
use crate::utils::error::{PulseError, Result};
use reqwest::Client;

pub struct EmbedPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> EmbedPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for EmbedPipeline<C> {
    async fn extract(&self) -> Result<String> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self.client.get(self.config.api_endpoint()).send().await?;

        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;

        // The embed envelope carries the HTML fragment in a `content` field
        let envelope: serde_json::Value = response.json().await?;
        let content = envelope
            .get("content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| PulseError::MissingContentError {
                field: "content".to_string(),
            })?;

        Ok(content.to_string())
    }

    async fn transform(&self, html: String) -> Result<SnapshotReport> {
        let raw_text = extract::realtime_container_text(&html);
        tracing::debug!("Realtime container text: {:?}", raw_text);

        let snapshot = parser::parse_realtime(&raw_text)?;
        let key_values = parser::parse_key_values(&raw_text);

        let prediction = extract::prediction_container_text(&html);
        let prediction = (prediction != extract::PREDICTION_MISSING).then_some(prediction);

        Ok(SnapshotReport {
            snapshot,
            key_values,
            prediction,
            raw_text,
            fetched_at: chrono::Utc::now(),
        })
    }

    async fn load(&self, report: SnapshotReport) -> Result<String> {
        let rendered = if self.config.json_output() {
            serde_json::to_string_pretty(&report)?
        } else {
            render_text(&report)
        };

        println!("{}", rendered);
        Ok(rendered)
    }
}

fn render_text(report: &SnapshotReport) -> String {
    let snap = &report.snapshot;
    let mut out = format!(
        "People: {}\nPercentage: {}\nFunctional: {}\nCondition: {}",
        snap.people, snap.percentage, snap.functional, snap.condition
    );
    if let Some(prediction) = &report.prediction {
        out.push_str("\n\nPrediction: ");
        out.push_str(prediction.trim());
    }
    out
}

/// Page-scrape mode: fetch the public page and return the text of each
/// category box.
pub async fn scrape_category_boxes(client: &Client, url: &str) -> Result<Vec<String>> {
    tracing::debug!("Fetching page: {}", url);
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;

    Ok(extract::category_box_texts(&body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RealtimeSnapshot;
    use std::collections::BTreeMap;

    fn report(prediction: Option<&str>) -> SnapshotReport {
        SnapshotReport {
            snapshot: RealtimeSnapshot {
                people: 42,
                percentage: 56,
                functional: 12,
                condition: 73,
            },
            key_values: BTreeMap::new(),
            prediction: prediction.map(str::to_string),
            raw_text: String::new(),
            fetched_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_render_text() {
        let rendered = render_text(&report(None));
        assert_eq!(
            rendered,
            "People: 42\nPercentage: 56\nFunctional: 12\nCondition: 73"
        );
    }

    #[test]
    fn test_render_text_with_prediction() {
        let rendered = render_text(&report(Some(" Busy after 17:00 ")));
        assert!(rendered.ends_with("Prediction: Busy after 17:00"));
    }
}
