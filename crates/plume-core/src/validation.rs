//! Pure post-form validation.
//!
//! All functions here are side-effect-free predicates over the raw
//! form input. Failures are `ValidationError` values for the form to
//! display, never panics or propagated errors. The variants that take
//! an explicit `now` exist so tests control the clock.

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};

use crate::config::{MAX_POST_LENGTH, MIN_SCHEDULE_MINUTES, WARNING_THRESHOLD};
use crate::error::ValidationError;

/// Per-field outcome of validating a complete post form. Both fields
/// are checked independently so the form can show every problem at
/// once rather than one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub content: Option<ValidationError>,
    pub scheduled_time: Option<ValidationError>,
}

/// Validated form data, ready to hand to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub content: String,
    pub scheduled_time: DateTime<Utc>,
}

/// Validate post content. The text is trimmed before both the
/// emptiness and the length check; whitespace-only content counts as
/// empty. Length is counted in Unicode scalar values.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    let trimmed = content.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::ContentRequired);
    }

    if trimmed.chars().count() > MAX_POST_LENGTH {
        return Err(ValidationError::ContentTooLong {
            max: MAX_POST_LENGTH,
        });
    }

    Ok(())
}

/// Validate a raw scheduled-time string against the current wall
/// clock. See [`validate_scheduled_time_at`].
pub fn validate_scheduled_time(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    validate_scheduled_time_at(raw, Utc::now())
}

/// Validate a raw scheduled-time string against an injected `now`.
/// The parsed instant must be strictly after `now`; equal-to-now is
/// rejected.
pub fn validate_scheduled_time_at(
    raw: &str,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::TimeRequired);
    }

    let parsed = parse_timestamp(raw).ok_or(ValidationError::InvalidTimeFormat)?;

    if parsed <= now {
        return Err(ValidationError::TimeNotInFuture);
    }

    Ok(parsed)
}

/// Accepts RFC 3339 as well as the naive `YYYY-MM-DDTHH:MM[:SS]`
/// shape that datetime pickers emit, the latter interpreted as local
/// time. Ambiguous local times (DST fold) resolve to the earlier
/// instant.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return Some(local.with_timezone(&Utc));
            }
        }
    }

    None
}

/// Validate a complete post form. See [`validate_post_form_at`].
pub fn validate_post_form(content: &str, raw_time: &str) -> Result<PostDraft, FormErrors> {
    validate_post_form_at(content, raw_time, Utc::now())
}

/// Validate a complete post form against an injected `now`. Both
/// checks run unconditionally; the draft (trimmed content, parsed
/// time) is produced only when both pass.
pub fn validate_post_form_at(
    content: &str,
    raw_time: &str,
    now: DateTime<Utc>,
) -> Result<PostDraft, FormErrors> {
    let content_result = validate_content(content);
    let time_result = validate_scheduled_time_at(raw_time, now);

    match (content_result, time_result) {
        (Ok(()), Ok(scheduled_time)) => Ok(PostDraft {
            content: content.trim().to_string(),
            scheduled_time,
        }),
        (content_result, time_result) => Err(FormErrors {
            content: content_result.err(),
            scheduled_time: time_result.err(),
        }),
    }
}

/// Characters left before the composer hits the hard limit. Negative
/// once the limit is exceeded.
pub fn remaining_chars(content: &str) -> i64 {
    MAX_POST_LENGTH as i64 - content.chars().count() as i64
}

/// Whether the composer should start warning about the length limit.
pub fn near_limit(content: &str) -> bool {
    content.chars().count() >= WARNING_THRESHOLD
}

/// Default instant to pre-fill a schedule picker with: a small head
/// start past `now`. A suggestion only - validation enforces nothing
/// beyond strictly-future.
pub fn suggested_schedule_time(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::minutes(MIN_SCHEDULE_MINUTES)
}
