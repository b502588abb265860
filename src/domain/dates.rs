use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::{self, FormatItem, well_known::Rfc3339},
    macros::format_description,
};

use super::error::DomainError;

/// `yyyy-MM-dd`, the listing default.
pub const DEFAULT_DATE_PATTERN: &str = "[year]-[month]-[day]";
pub const ISO_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const NAIVE_DATETIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Format `date` with a `time` format description such as
/// `"[month repr:short] [day], [year]"`.
pub fn format_date(date: Date, pattern: &str) -> Result<String, DomainError> {
    let items = format_description::parse(pattern)
        .map_err(|err| DomainError::invalid_date_pattern(pattern, err))?;
    date.format(&items).map_err(|err| DomainError::DateFormatting {
        date,
        reason: err.to_string(),
    })
}

/// Parse the date forms that appear in front matter: a bare calendar date,
/// an RFC 3339 timestamp, or `YYYY-MM-DD HH:MM:SS`.
pub fn parse_front_matter_date(value: &str) -> Result<Date, DomainError> {
    let value = value.trim();

    if let Ok(date) = Date::parse(value, ISO_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(datetime) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = PrimitiveDateTime::parse(value, NAIVE_DATETIME_FORMAT) {
        return Ok(datetime.date());
    }

    Err(DomainError::UnrecognisedDate {
        value: value.to_string(),
    })
}
