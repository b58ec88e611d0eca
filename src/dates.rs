//! Parsing of user supplied dates and the human-readable rendering used in responses.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

/// Parses a date the way clients send them, interpreting offset-less input as UTC.
///
/// Accepts `2023`, `2023-01`, `2023-01-15`, date-times with `T` or a space before the
/// time (minute, second or fractional precision, optionally followed by `Z` or an
/// offset) and the rendered form `Sun Jan 15 2023`. Surrounding whitespace is ignored.
pub fn parse_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    if let Some(date) = parse_calendar_date(raw) {
        return Some(date.midnight().assume_utc());
    }

    let offset_formats = [
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"
        ),
        format_description!(
            "[year]-[month]-[day] [hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"
        ),
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        ),
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"
        ),
    ];
    if let Some(ts) = offset_formats
        .iter()
        .find_map(|fmt| OffsetDateTime::parse(raw, *fmt).ok())
    {
        return Some(ts);
    }

    // A trailing `Z` names UTC, which is already the assumption for local times.
    let local = raw
        .strip_suffix('Z')
        .or_else(|| raw.strip_suffix('z'))
        .unwrap_or(raw);
    let local_formats = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
    ];
    local_formats
        .iter()
        .find_map(|fmt| PrimitiveDateTime::parse(local, *fmt).ok())
        .map(PrimitiveDateTime::assume_utc)
}

/// Date-only forms: `2023-01-15`, `Sun Jan 15 2023`, and the partial `2023-01` / `2023`
/// which start at the first day of the month or year.
fn parse_calendar_date(raw: &str) -> Option<Date> {
    if let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) {
        return Some(date);
    }
    if let Ok(date) = Date::parse(
        raw,
        format_description!("[weekday repr:short] [month repr:short] [day] [year]"),
    ) {
        return Some(date);
    }

    let (year, month) = match raw.split_once('-') {
        Some((year, month)) => (year, Some(month)),
        None => (raw, None),
    };
    let year = fixed_digits(year, 4)?;
    let month = match month {
        Some(month) => Month::try_from(u8::try_from(fixed_digits(month, 2)?).ok()?).ok()?,
        None => Month::January,
    };
    Date::from_calendar_date(i32::try_from(year).ok()?, month, 1).ok()
}

fn fixed_digits(raw: &str, width: usize) -> Option<u32> {
    if raw.len() != width || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Renders the UTC calendar day of `ts` as `Sun Jan 15 2023`.
pub fn render_date(ts: OffsetDateTime) -> Result<String, time::error::Format> {
    ts.to_offset(time::UtcOffset::UTC)
        .date()
        .format(format_description!("[weekday repr:short] [month repr:short] [day] [year]"))
}
