// src/types/preferences.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub const DEFAULT_USERNAME: &str = "jon_sundin";
pub const DEFAULT_DISTANCE_MILES: u32 = 100;
pub const DEFAULT_MIN_APPLICANTS: u32 = 0;
pub const DEFAULT_MAX_APPLICANTS: u32 = 90;
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

const DEFAULT_POSITIONS: &str = "sales engineer\nsoftware engineer";
const DEFAULT_LOCATIONS: &str = "San Diego\nlos angeles";
const DEFAULT_COMPANY_BLACKLIST: &str = "sony\napple";
const DEFAULT_TITLE_BLACKLIST: &str = "janitor\ncook\n";
const DEFAULT_LOCATION_BLACKLIST: &str = "venus\njupiter";

/// Experience levels accepted by the job search. One flag per level.
/// Keys missing from a preferences file keep the form defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "ExperienceLevels::entry_and_associate")]
pub struct ExperienceLevels {
    pub internship: bool,
    pub entry: bool,
    pub associate: bool,
    #[serde(rename = "mid-senior level")]
    pub mid_senior_level: bool,
    pub director: bool,
    pub executive: bool,
}

impl ExperienceLevels {
    /// Entry and associate selected, everything else off.
    pub fn entry_and_associate() -> Self {
        Self {
            entry: true,
            associate: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "JobTypes::paid")]
pub struct JobTypes {
    #[serde(rename = "full-time")]
    pub full_time: bool,
    pub contract: bool,
    #[serde(rename = "part-time")]
    pub part_time: bool,
    pub temporary: bool,
    pub internship: bool,
    pub other: bool,
    pub volunteer: bool,
}

impl JobTypes {
    /// Every paid arrangement except internships.
    pub fn paid() -> Self {
        Self {
            full_time: true,
            contract: true,
            part_time: true,
            temporary: true,
            ..Self::default()
        }
    }
}

/// How far back job postings are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRange {
    AllTime,
    Month,
    Week,
    Last24Hours,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::AllTime,
        DateRange::Month,
        DateRange::Week,
        DateRange::Last24Hours,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::AllTime => "all time",
            DateRange::Month => "month",
            DateRange::Week => "week",
            DateRange::Last24Hours => "24 hours",
        }
    }
}

impl FromStr for DateRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownDateRange(s.to_string()))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of the date selection: every option present, exactly one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeFlags {
    #[serde(rename = "all time")]
    pub all_time: bool,
    pub month: bool,
    pub week: bool,
    #[serde(rename = "24 hours")]
    pub last_24_hours: bool,
}

impl From<DateRange> for DateRangeFlags {
    fn from(range: DateRange) -> Self {
        Self {
            all_time: range == DateRange::AllTime,
            month: range == DateRange::Month,
            week: range == DateRange::Week,
            last_24_hours: range == DateRange::Last24Hours,
        }
    }
}

impl DateRangeFlags {
    /// The selected range, or `None` if the flags are not exactly one-hot.
    pub fn selected(&self) -> Option<DateRange> {
        let flags = [
            (DateRange::AllTime, self.all_time),
            (DateRange::Month, self.month),
            (DateRange::Week, self.week),
            (DateRange::Last24Hours, self.last_24_hours),
        ];

        let mut set = flags.iter().filter(|(_, on)| *on).map(|(range, _)| *range);
        match (set.next(), set.next()) {
            (Some(range), None) => Some(range),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantsThreshold {
    pub min_applicants: u32,
    pub max_applicants: u32,
}

impl Default for ApplicantsThreshold {
    fn default() -> Self {
        Self {
            min_applicants: DEFAULT_MIN_APPLICANTS,
            max_applicants: DEFAULT_MAX_APPLICANTS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmModelType {
    #[default]
    OpenAi,
    Other,
}

/// Form values exactly as entered, before any list splitting or date expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPreferences {
    pub username: String,
    pub remote: bool,
    pub generate_resume: bool,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevels,
    #[serde(rename = "jobTypes")]
    pub job_types: JobTypes,
    pub date: String,
    pub positions: String,
    pub locations: String,
    pub apply_once_at_company: bool,
    pub distance: u32,
    pub company_blacklist: String,
    pub title_blacklist: String,
    pub location_blacklist: String,
    pub job_applicants_threshold: ApplicantsThreshold,
    pub llm_model_type: LlmModelType,
    pub llm_model: String,
}

impl Default for RawPreferences {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            remote: true,
            generate_resume: false,
            experience_level: ExperienceLevels::entry_and_associate(),
            job_types: JobTypes::paid(),
            date: DateRange::Month.as_str().to_string(),
            positions: DEFAULT_POSITIONS.to_string(),
            locations: DEFAULT_LOCATIONS.to_string(),
            apply_once_at_company: true,
            distance: DEFAULT_DISTANCE_MILES,
            company_blacklist: DEFAULT_COMPANY_BLACKLIST.to_string(),
            title_blacklist: DEFAULT_TITLE_BLACKLIST.to_string(),
            location_blacklist: DEFAULT_LOCATION_BLACKLIST.to_string(),
            job_applicants_threshold: ApplicantsThreshold::default(),
            llm_model_type: LlmModelType::OpenAi,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
        }
    }
}

impl RawPreferences {
    /// Checks run by the submission flow before normalizing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername);
        }

        let threshold = &self.job_applicants_threshold;
        if threshold.min_applicants > threshold.max_applicants {
            return Err(ValidationError::InvertedApplicantsThreshold {
                min: threshold.min_applicants,
                max: threshold.max_applicants,
            });
        }

        self.date.parse::<DateRange>()?;
        Ok(())
    }
}

/// Wire-ready payload posted to the config endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedConfig {
    pub username: String,
    pub remote: bool,
    pub generate_resume: bool,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevels,
    #[serde(rename = "jobTypes")]
    pub job_types: JobTypes,
    pub date: DateRangeFlags,
    pub positions: Vec<String>,
    pub locations: Vec<String>,
    pub apply_once_at_company: bool,
    pub distance: u32,
    pub company_blacklist: Vec<String>,
    pub title_blacklist: Vec<String>,
    pub location_blacklist: Vec<String>,
    pub job_applicants_threshold: ApplicantsThreshold,
    pub llm_model_type: LlmModelType,
    pub llm_model: String,
}
