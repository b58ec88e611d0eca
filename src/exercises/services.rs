use anyhow::anyhow;
use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dates::{parse_date, render_date};
use crate::error::ApiError;
use crate::exercises::dto::{AddExerciseForm, ExerciseResponse, LogEntry, LogQuery, LogResponse};
use crate::exercises::repo_types::{LogFilter, NewExercise};
use crate::store::TrackerStore;
use crate::users::repo_types::User;

const USER_NOT_FOUND: &str = "User not found";

/// Reads the integer prefix of `raw`: optional leading whitespace and sign, then digits.
/// Anything after the digits is ignored; no digits at all yields `None`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Resolves the path identifier to a user. A malformed identifier is a lookup failure.
async fn find_user(
    store: &dyn TrackerStore,
    raw_id: &str,
    failure: &'static str,
) -> Result<User, ApiError> {
    let user_id = Uuid::parse_str(raw_id).map_err(ApiError::internal(failure))?;
    store
        .find_user(user_id)
        .await
        .map_err(ApiError::internal(failure))?
        .ok_or(ApiError::NotFound(USER_NOT_FOUND))
}

pub async fn add_exercise(
    store: &dyn TrackerStore,
    raw_id: &str,
    form: AddExerciseForm,
) -> Result<ExerciseResponse, ApiError> {
    const FAILURE: &str = "Error adding exercise";

    let user = find_user(store, raw_id, FAILURE).await?;

    let duration = form
        .duration
        .as_deref()
        .and_then(parse_leading_int)
        .and_then(|n| i32::try_from(n).ok());
    let date = match non_empty(form.date) {
        Some(raw) => Some(
            parse_date(&raw)
                .ok_or_else(|| anyhow!("cannot read {raw:?} as a date"))
                .map_err(ApiError::internal(FAILURE))?,
        ),
        None => None,
    };

    let exercise = store
        .create_exercise(NewExercise {
            user_id: user.id,
            description: form.description.unwrap_or_default(),
            duration,
            date,
        })
        .await
        .map_err(ApiError::internal(FAILURE))?;
    info!(user_id = %user.id, exercise_id = %exercise.id, "exercise logged");

    Ok(ExerciseResponse {
        id: user.id,
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: render_date(exercise.date).map_err(ApiError::internal(FAILURE))?,
    })
}

fn parse_bound(
    raw: Option<String>,
    param: &'static str,
) -> Result<Option<OffsetDateTime>, ApiError> {
    match non_empty(raw) {
        Some(raw) => match parse_date(&raw) {
            Some(date) => Ok(Some(date)),
            None => {
                warn!(param, value = %raw, "rejecting log date bound");
                Err(ApiError::InvalidDateBound(param))
            }
        },
        None => Ok(None),
    }
}

pub async fn exercise_log(
    store: &dyn TrackerStore,
    raw_id: &str,
    query: LogQuery,
) -> Result<LogResponse, ApiError> {
    const FAILURE: &str = "Internal Server Error";

    let user = find_user(store, raw_id, FAILURE).await?;

    let mut filter = LogFilter::for_user(user.id);
    filter.from = parse_bound(query.from, "from")?;
    filter.to = parse_bound(query.to, "to")?;
    filter.limit = query
        .limit
        .as_deref()
        .and_then(parse_leading_int)
        .filter(|n| *n > 0);

    let exercises = store
        .find_exercises(&filter)
        .await
        .map_err(ApiError::internal(FAILURE))?;
    let log = exercises
        .into_iter()
        .map(|e| -> Result<LogEntry, time::error::Format> {
            Ok(LogEntry {
                date: render_date(e.date)?,
                description: e.description,
                duration: e.duration,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(ApiError::internal(FAILURE))?;

    Ok(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    })
}
