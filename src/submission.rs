// src/submission.rs
//! Snapshot → validate → normalize → POST, keeping the entered data on failure.

use chrono::Utc;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::core::ConfigClient;
use crate::draft::PreferencesDraft;
use crate::error::{SubmitError, TransportError, ValidationError};
use crate::normalizer::normalize;
use crate::types::{NormalizedConfig, RawPreferences, SubmissionReceipt};

#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Accepted by the endpoint.
    Submitted(SubmissionReceipt),
    /// Never sent: the preferences did not validate.
    Rejected {
        snapshot: RawPreferences,
        error: ValidationError,
    },
    /// Sent but the transport failed. The snapshot is kept for re-submission.
    Failed {
        snapshot: RawPreferences,
        config: NormalizedConfig,
        error: TransportError,
    },
}

impl SubmissionOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitted(_))
    }

    /// The entered values, when the submission did not go through.
    pub fn snapshot(&self) -> Option<&RawPreferences> {
        match self {
            SubmissionOutcome::Submitted(_) => None,
            SubmissionOutcome::Rejected { snapshot, .. }
            | SubmissionOutcome::Failed { snapshot, .. } => Some(snapshot),
        }
    }

    pub fn into_result(self) -> Result<SubmissionReceipt, SubmitError> {
        match self {
            SubmissionOutcome::Submitted(receipt) => Ok(receipt),
            SubmissionOutcome::Rejected { error, .. } => Err(error.into()),
            SubmissionOutcome::Failed { error, .. } => Err(error.into()),
        }
    }
}

/// Validate and normalize without touching the network.
pub fn prepare(raw: &RawPreferences) -> Result<NormalizedConfig, ValidationError> {
    raw.validate()?;
    normalize(raw)
}

pub struct SubmissionFlow {
    client: ConfigClient,
}

impl SubmissionFlow {
    pub fn new(client: ConfigClient) -> Self {
        Self { client }
    }

    pub async fn submit(&self, draft: &PreferencesDraft) -> SubmissionOutcome {
        let snapshot = draft.snapshot();
        let id = Uuid::new_v4();
        let span = info_span!("submission", %id, username = %snapshot.username);

        self.run(id, snapshot).instrument(span).await
    }

    async fn run(&self, id: Uuid, snapshot: RawPreferences) -> SubmissionOutcome {
        let config = match prepare(&snapshot) {
            Ok(config) => config,
            Err(error) => {
                warn!("Submission rejected: {}", error);
                return SubmissionOutcome::Rejected { snapshot, error };
            }
        };

        match serde_json::to_string_pretty(&config) {
            Ok(payload) => debug!("Normalized payload:\n{}", payload),
            Err(e) => debug!("Normalized payload not printable: {}", e),
        }

        match self.client.submit(&config).await {
            Ok(response) => {
                info!("Submission accepted with status {}", response.status);
                SubmissionOutcome::Submitted(SubmissionReceipt {
                    id,
                    submitted_at: Utc::now(),
                    config,
                    response,
                })
            }
            Err(error) => {
                error!("Error posting config: {}", error);
                SubmissionOutcome::Failed {
                    snapshot,
                    config,
                    error,
                }
            }
        }
    }
}
