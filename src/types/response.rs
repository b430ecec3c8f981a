// src/types/response.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::preferences::NormalizedConfig;

/// What the config endpoint answered. The body is opaque: JSON when it
/// parses, otherwise the raw text as a JSON string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl SubmitResponse {
    pub fn from_text(status: u16, text: String) -> Self {
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
        Self { status, body }
    }
}

/// Record of one accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub config: NormalizedConfig,
    pub response: SubmitResponse,
}
