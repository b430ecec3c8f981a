// src/error.rs
use thiserror::Error;

/// Raised before any network call when the preferences cannot be sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown date range '{0}'. Use one of: all time, month, week, 24 hours")]
    UnknownDateRange(String),

    #[error("Applicant threshold is inverted: min_applicants ({min}) > max_applicants ({max})")]
    InvertedApplicantsThreshold { min: u32, max: u32 },

    #[error("Username must not be empty")]
    EmptyUsername,
}

/// Failure while posting the normalized config to the remote endpoint.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Config endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Request(err)
        }
    }
}

/// Either side of a submission failure.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
