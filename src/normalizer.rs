// src/normalizer.rs
//! Turns the as-entered form values into the payload the config endpoint expects.

use crate::error::ValidationError;
use crate::types::{DateRange, DateRangeFlags, NormalizedConfig, RawPreferences};

/// Split a multi-line text field into trimmed, non-empty entries, keeping order.
///
/// Every list field is newline-delimited; commas are part of an entry
/// (`"San Francisco, CA"` stays one location).
pub fn split_entries(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expand the single date selection into the four-key flag record.
pub fn expand_date_range(date: &str) -> Result<DateRangeFlags, ValidationError> {
    let range: DateRange = date.parse()?;
    Ok(DateRangeFlags::from(range))
}

/// Build the wire payload. Fails only when `date` is outside the closed set;
/// every other field is accepted as-is.
pub fn normalize(raw: &RawPreferences) -> Result<NormalizedConfig, ValidationError> {
    let date = expand_date_range(&raw.date)?;

    Ok(NormalizedConfig {
        username: raw.username.clone(),
        remote: raw.remote,
        generate_resume: raw.generate_resume,
        experience_level: raw.experience_level,
        job_types: raw.job_types,
        date,
        positions: split_entries(&raw.positions),
        locations: split_entries(&raw.locations),
        apply_once_at_company: raw.apply_once_at_company,
        distance: raw.distance,
        company_blacklist: split_entries(&raw.company_blacklist),
        title_blacklist: split_entries(&raw.title_blacklist),
        location_blacklist: split_entries(&raw.location_blacklist),
        job_applicants_threshold: raw.job_applicants_threshold,
        llm_model_type: raw.llm_model_type,
        llm_model: raw.llm_model.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApplicantsThreshold, ExperienceLevels, JobTypes};

    fn all_lists(config: &NormalizedConfig) -> Vec<&Vec<String>> {
        vec![
            &config.positions,
            &config.locations,
            &config.company_blacklist,
            &config.title_blacklist,
            &config.location_blacklist,
        ]
    }

    #[test]
    fn test_split_entries_example() {
        assert_eq!(
            split_entries("sales engineer\n\n  software engineer  \n"),
            vec!["sales engineer", "software engineer"]
        );
    }

    #[test]
    fn test_split_entries_edge_cases() {
        assert!(split_entries("").is_empty());
        assert!(split_entries("\n \n\t\n").is_empty());
        assert_eq!(split_entries("sony\r\napple\r\n"), vec!["sony", "apple"]);
        assert_eq!(
            split_entries("San Francisco, CA\nDallas, TX"),
            vec!["San Francisco, CA", "Dallas, TX"]
        );
    }

    #[test]
    fn test_split_entries_preserves_order() {
        assert_eq!(split_entries("c\n  a\n\nb  "), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_normalized_lists_are_clean() {
        let raw = RawPreferences {
            positions: "  a \n\n b".to_string(),
            locations: "\t\tSan Diego\n            Austin\n".to_string(),
            company_blacklist: "sony\napple".to_string(),
            title_blacklist: "janitor\ncook\n".to_string(),
            location_blacklist: "\n\nvenus\n   \njupiter   ".to_string(),
            ..RawPreferences::default()
        };

        let config = normalize(&raw).unwrap();
        for list in all_lists(&config) {
            for entry in list {
                assert!(!entry.is_empty());
                assert_eq!(entry.trim(), entry);
            }
        }
        assert_eq!(config.locations, vec!["San Diego", "Austin"]);
        assert_eq!(config.title_blacklist, vec!["janitor", "cook"]);
        assert_eq!(config.location_blacklist, vec!["venus", "jupiter"]);
    }

    #[test]
    fn test_expand_week() {
        let flags = expand_date_range("week").unwrap();
        assert_eq!(
            serde_json::to_value(flags).unwrap(),
            serde_json::json!({
                "all time": false,
                "month": false,
                "week": true,
                "24 hours": false
            })
        );
    }

    #[test]
    fn test_expand_is_one_hot_and_idempotent() {
        for range in DateRange::ALL {
            let first = expand_date_range(range.as_str()).unwrap();
            let second = expand_date_range(range.as_str()).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.selected(), Some(range));
        }
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let raw = RawPreferences {
            date: "invalid".to_string(),
            ..RawPreferences::default()
        };
        assert_eq!(
            normalize(&raw),
            Err(ValidationError::UnknownDateRange("invalid".to_string()))
        );
    }

    #[test]
    fn test_boolean_groups_pass_through() {
        for mask in 0u8..64 {
            let bit = |i: u8| mask & (1 << i) != 0;
            let levels = ExperienceLevels {
                internship: bit(0),
                entry: bit(1),
                associate: bit(2),
                mid_senior_level: bit(3),
                director: bit(4),
                executive: bit(5),
            };
            let types = JobTypes {
                full_time: bit(5),
                contract: bit(4),
                part_time: bit(3),
                temporary: bit(2),
                internship: bit(1),
                other: bit(0),
                volunteer: mask % 3 == 0,
            };
            let raw = RawPreferences {
                experience_level: levels,
                job_types: types,
                ..RawPreferences::default()
            };

            let config = normalize(&raw).unwrap();
            assert_eq!(config.experience_level, levels);
            assert_eq!(config.job_types, types);

            let json = serde_json::to_value(&config).unwrap();
            assert_eq!(json["experienceLevel"].as_object().unwrap().len(), 6);
            assert_eq!(json["jobTypes"].as_object().unwrap().len(), 7);
        }
    }

    #[test]
    fn test_numbers_pass_through() {
        let config = normalize(&RawPreferences::default()).unwrap();
        assert_eq!(config.distance, 100);
        assert_eq!(
            config.job_applicants_threshold,
            ApplicantsThreshold {
                min_applicants: 0,
                max_applicants: 90
            }
        );

        // normalize leaves ordering checks to validate()
        let raw = RawPreferences {
            distance: 0,
            job_applicants_threshold: ApplicantsThreshold {
                min_applicants: 500,
                max_applicants: 3,
            },
            ..RawPreferences::default()
        };
        let config = normalize(&raw).unwrap();
        assert_eq!(config.distance, 0);
        assert_eq!(config.job_applicants_threshold.min_applicants, 500);
        assert_eq!(config.job_applicants_threshold.max_applicants, 3);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let raw = RawPreferences::default();
        assert_eq!(normalize(&raw).unwrap(), normalize(&raw).unwrap());
    }

    #[test]
    fn test_wire_shape() {
        let config = normalize(&RawPreferences::default()).unwrap();
        let json = serde_json::to_value(&config).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();

        for key in [
            "username",
            "remote",
            "generate_resume",
            "experienceLevel",
            "jobTypes",
            "date",
            "positions",
            "locations",
            "apply_once_at_company",
            "distance",
            "company_blacklist",
            "title_blacklist",
            "location_blacklist",
            "job_applicants_threshold",
            "llm_model_type",
            "llm_model",
        ] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
        assert_eq!(keys.len(), 16);
        assert_eq!(json["date"]["month"], true);
        assert_eq!(json["llm_model_type"], "openai");
        assert_eq!(json["positions"][0], "sales engineer");
        assert_eq!(json["locations"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_default_lists_normalize_like_form() {
        let config = normalize(&RawPreferences::default()).unwrap();
        assert_eq!(config.positions, vec!["sales engineer", "software engineer"]);
        assert_eq!(config.locations, vec!["San Diego", "los angeles"]);
        assert_eq!(config.company_blacklist, vec!["sony", "apple"]);
        assert_eq!(config.title_blacklist, vec!["janitor", "cook"]);
        assert_eq!(config.location_blacklist, vec!["venus", "jupiter"]);
    }
}
