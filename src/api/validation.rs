use time::{Date, Time};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::core::config::GenerationSettings;
use crate::core::time::{parse_clock, parse_date};
use crate::db::types::EventType;
use crate::repositories::events::EventDetails;
use crate::schemas::admin::EventDetailsInput;

pub(crate) fn validate_payload(payload: &impl Validate) -> Result<(), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))
}

pub(crate) fn require_non_empty<'a>(value: &'a str, field: &str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Resolves the requested question count against the configured bounds.
pub(crate) fn question_count(
    requested: Option<u32>,
    settings: &GenerationSettings,
) -> Result<usize, ApiError> {
    let count = requested.unwrap_or(settings.default_question_count);
    if count < settings.min_question_count || count > settings.max_question_count {
        return Err(ApiError::BadRequest(format!(
            "question_count must be between {} and {}",
            settings.min_question_count, settings.max_question_count
        )));
    }
    Ok(count as usize)
}

/// Turns admin input into stored event fields, applying the `exam_date`
/// fallback and the date, time and cutoff rules.
pub(crate) fn event_details(input: EventDetailsInput) -> Result<EventDetails, ApiError> {
    validate_payload(&input)?;

    let fallback = input.exam_date.as_deref().filter(|value| !value.trim().is_empty());
    let start_raw = input
        .exam_start_date
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .or(fallback)
        .ok_or_else(|| ApiError::BadRequest("exam_start_date is required".to_string()))?;
    let end_raw = input
        .exam_end_date
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .or(fallback)
        .unwrap_or(start_raw);

    let exam_start_date = date_field(start_raw, "exam_start_date")?;
    let exam_end_date = date_field(end_raw, "exam_end_date")?;
    if exam_end_date < exam_start_date {
        return Err(ApiError::BadRequest(
            "exam_end_date must not be before exam_start_date".to_string(),
        ));
    }

    let start_time = clock_field(&input.start_time, "start_time")?;
    let end_time = clock_field(&input.end_time, "end_time")?;

    let event_type = match input.event_type.as_deref().filter(|value| !value.trim().is_empty()) {
        None => EventType::Regular,
        Some(raw) => EventType::from_input(raw).ok_or_else(|| {
            ApiError::BadRequest("event_type must be REGULAR or WALKIN".to_string())
        })?,
    };

    Ok(EventDetails {
        exam_name: input.exam_name.trim().to_string(),
        exam_start_date,
        exam_end_date,
        start_time,
        end_time,
        cutoff_percentage: input.cutoff_percentage.unwrap_or_default(),
        event_type,
    })
}

fn date_field(value: &str, field: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|_| ApiError::BadRequest(format!("{field} must be YYYY-MM-DD")))
}

fn clock_field(value: &str, field: &str) -> Result<Time, ApiError> {
    parse_clock(value).map_err(|_| ApiError::BadRequest(format!("{field} must be HH:MM or HH:MM:SS")))
}
