use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One occupancy reading. Fields are assigned positionally from the numeric
/// tokens in the realtime container text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealtimeSnapshot {
    pub people: u32,
    pub percentage: u32,
    /// Equipment in use. The source may express this as "used / total";
    /// only the numerator is kept.
    pub functional: u32,
    pub condition: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotReport {
    pub snapshot: RealtimeSnapshot,
    pub key_values: BTreeMap<String, String>,
    pub prediction: Option<String>,
    #[serde(skip)]
    pub raw_text: String,
    pub fetched_at: DateTime<Utc>,
}
