use chrono::{DateTime, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::shared::constants::{MAX_NICHE_TAGS, MAX_NICHE_TAG_LEN};

lazy_static! {
    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "john_doe", "user123", "_admin", "JohnDoe"
    /// - Invalid: "123user", "-user", "user-name", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// Reject strings that are empty once surrounding whitespace is removed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_NICHE_TAGS {
        let mut err = ValidationError::new("too_many_tags");
        err.message = Some(format!("At most {} niche tags are allowed", MAX_NICHE_TAGS).into());
        return Err(err);
    }
    if tags
        .iter()
        .any(|t| t.trim().is_empty() || t.len() > MAX_NICHE_TAG_LEN)
    {
        let mut err = ValidationError::new("invalid_tag");
        err.message = Some(
            format!(
                "Niche tags must be non-blank and at most {} characters",
                MAX_NICHE_TAG_LEN
            )
            .into(),
        );
        return Err(err);
    }
    Ok(())
}

/// Parse a deadline given either as an ISO-8601 date (`2025-03-01`, read as
/// midnight UTC) or as an RFC-3339 date-time.
pub fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn validate_deadline(value: &str) -> Result<(), ValidationError> {
    match parse_deadline(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("invalid_deadline")),
    }
}

/// Normalize tags: trim, drop duplicates, keep first-seen order
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
