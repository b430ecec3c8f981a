// src/lib.rs
//! Job-search preferences: form draft, normalization and submission to the
//! remote config endpoint.

pub mod core;
pub mod draft;
pub mod error;
pub mod normalizer;
pub mod submission;
pub mod types;

pub use crate::core::{ConfigClient, ConfigManager, EndpointConfig};
pub use draft::{FieldEdit, ListField, PreferencesDraft};
pub use error::{SubmitError, TransportError, ValidationError};
pub use normalizer::{expand_date_range, normalize, split_entries};
pub use submission::{prepare, SubmissionFlow, SubmissionOutcome};
pub use types::{NormalizedConfig, RawPreferences};
