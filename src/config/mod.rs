use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EMBED_ENDPOINT: &str = "https://embed.gymplus.fi/v2/light/bold/lutsk";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gym-pulse")]
#[command(about = "Fetches and parses realtime gym occupancy data")]
pub struct CliConfig {
    /// Embed API endpoint returning a JSON envelope with a `content` HTML field
    #[arg(long, default_value = DEFAULT_EMBED_ENDPOINT)]
    pub api_endpoint: String,

    /// Scrape category boxes straight off this page instead of the embed API
    #[arg(long)]
    pub page_url: Option<String>,

    /// Report format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn json_output(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        if let Some(page_url) = &self.page_url {
            validate_url("page_url", page_url)?;
        }
        Ok(())
    }
}
