pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{etl::SnapshotEngine, pipeline::EmbedPipeline};
pub use crate::domain::model::{RealtimeSnapshot, SnapshotReport};
pub use crate::utils::error::{PulseError, Result};
