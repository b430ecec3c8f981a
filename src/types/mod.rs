// src/types/mod.rs
pub mod preferences;
pub mod response;

pub use preferences::{
    ApplicantsThreshold, DateRange, DateRangeFlags, ExperienceLevels, JobTypes, LlmModelType,
    NormalizedConfig, RawPreferences,
};
pub use response::{SubmissionReceipt, SubmitResponse};
