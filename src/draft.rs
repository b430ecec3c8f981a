// src/draft.rs
//! Immutable stand-in for the form state. Every edit yields a new draft and
//! `snapshot()` hands the current values to the normalizer.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::types::{
    ApplicantsThreshold, DateRange, ExperienceLevels, JobTypes, LlmModelType, RawPreferences,
};

/// Which multi-line list a text edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Positions,
    Locations,
    CompanyBlacklist,
    TitleBlacklist,
    LocationBlacklist,
}

/// A single field change, as a form widget would report it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Username(String),
    Remote(bool),
    GenerateResume(bool),
    ApplyOnceAtCompany(bool),
    ExperienceLevel(ExperienceLevels),
    JobTypes(JobTypes),
    Date(String),
    List(ListField, String),
    Distance(u32),
    ApplicantsThreshold { min: u32, max: u32 },
    LlmModelType(LlmModelType),
    LlmModel(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesDraft {
    values: RawPreferences,
}

impl PreferencesDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(values: RawPreferences) -> Self {
        Self { values }
    }

    /// Load a draft from a YAML or TOML preferences file. Missing fields keep
    /// their defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read preferences file: {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let values: RawPreferences = match extension.as_deref() {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML: {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML: {}", path.display()))?,
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON: {}", path.display()))?,
            _ => anyhow::bail!(
                "Unsupported preferences file: {}. Use .yaml, .yml, .toml or .json",
                path.display()
            ),
        };

        debug!("Loaded preferences for {} from {}", values.username, path.display());
        Ok(Self { values })
    }

    pub fn apply(self, edit: FieldEdit) -> Self {
        match edit {
            FieldEdit::Username(name) => self.with_username(name),
            FieldEdit::Remote(on) => self.with_remote(on),
            FieldEdit::GenerateResume(on) => self.with_generate_resume(on),
            FieldEdit::ApplyOnceAtCompany(on) => self.with_apply_once_at_company(on),
            FieldEdit::ExperienceLevel(levels) => self.with_experience_level(levels),
            FieldEdit::JobTypes(types) => self.with_job_types(types),
            FieldEdit::Date(date) => self.with_date(date),
            FieldEdit::List(field, text) => self.with_list(field, text),
            FieldEdit::Distance(miles) => self.with_distance(miles),
            FieldEdit::ApplicantsThreshold { min, max } => self.with_applicants_threshold(min, max),
            FieldEdit::LlmModelType(kind) => self.with_llm_model_type(kind),
            FieldEdit::LlmModel(model) => self.with_llm_model(model),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.values.username = username.into();
        self
    }

    pub fn with_remote(mut self, remote: bool) -> Self {
        self.values.remote = remote;
        self
    }

    pub fn with_generate_resume(mut self, generate: bool) -> Self {
        self.values.generate_resume = generate;
        self
    }

    pub fn with_apply_once_at_company(mut self, once: bool) -> Self {
        self.values.apply_once_at_company = once;
        self
    }

    pub fn with_experience_level(mut self, levels: ExperienceLevels) -> Self {
        self.values.experience_level = levels;
        self
    }

    pub fn with_job_types(mut self, types: JobTypes) -> Self {
        self.values.job_types = types;
        self
    }

    /// Takes the raw selection text; it is checked at normalization time.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.values.date = date.into();
        self
    }

    pub fn with_date_range(self, range: DateRange) -> Self {
        self.with_date(range.as_str())
    }

    pub fn with_list(mut self, field: ListField, text: impl Into<String>) -> Self {
        let text = text.into();
        match field {
            ListField::Positions => self.values.positions = text,
            ListField::Locations => self.values.locations = text,
            ListField::CompanyBlacklist => self.values.company_blacklist = text,
            ListField::TitleBlacklist => self.values.title_blacklist = text,
            ListField::LocationBlacklist => self.values.location_blacklist = text,
        }
        self
    }

    pub fn with_distance(mut self, miles: u32) -> Self {
        self.values.distance = miles;
        self
    }

    pub fn with_applicants_threshold(mut self, min: u32, max: u32) -> Self {
        self.values.job_applicants_threshold = ApplicantsThreshold {
            min_applicants: min,
            max_applicants: max,
        };
        self
    }

    pub fn with_llm_model_type(mut self, kind: LlmModelType) -> Self {
        self.values.llm_model_type = kind;
        self
    }

    pub fn with_llm_model(mut self, model: impl Into<String>) -> Self {
        self.values.llm_model = model.into();
        self
    }

    pub fn values(&self) -> &RawPreferences {
        &self.values
    }

    /// Consistent copy of every field at submission time.
    pub fn snapshot(&self) -> RawPreferences {
        self.values.clone()
    }
}
