use thiserror::Error;
use time::Date;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("content item `{slug}` not found")]
    NotFound { slug: String },
    #[error("invalid date pattern `{pattern}`: {reason}")]
    InvalidDatePattern { pattern: String, reason: String },
    #[error("cannot format {date}: {reason}")]
    DateFormatting { date: Date, reason: String },
    #[error("unrecognised date `{value}`")]
    UnrecognisedDate { value: String },
}

impl DomainError {
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound { slug: slug.into() }
    }

    pub fn invalid_date_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidDatePattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}
