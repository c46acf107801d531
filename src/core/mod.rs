pub mod etl;
pub mod extract;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{RealtimeSnapshot, SnapshotReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
