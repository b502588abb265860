//! Rendering of command results for stdout.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::Serialize;

use crate::application::error::AppError;
use crate::domain::{categories, content::ContentItem, dates::format_date, text::plainify};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format `{other}`")),
        }
    }
}

/// Listing view of a content item.
#[derive(Debug, Serialize)]
pub struct ItemSummary<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl<'a> ItemSummary<'a> {
    pub fn build(item: &'a ContentItem, date_pattern: &str) -> Result<Self, AppError> {
        let date = item
            .date
            .map(|date| format_date(date, date_pattern))
            .transpose()?;

        Ok(Self {
            slug: &item.slug,
            title: &item.title,
            category: item.category.as_deref(),
            category_name: item.category.as_deref().map(categories::display_name),
            tags: &item.tags,
            date,
            summary: item.description.as_deref().map(plainify),
        })
    }
}

pub fn render_items(
    items: &[&ContentItem],
    format: OutputFormat,
    date_pattern: &str,
) -> Result<String, AppError> {
    let summaries = items
        .iter()
        .map(|item| ItemSummary::build(item, date_pattern))
        .collect::<Result<Vec<_>, _>>()?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(text_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_index(index: &BTreeMap<String, Vec<String>>) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(index)?)
}

fn text_line(summary: &ItemSummary<'_>) -> String {
    let date = summary.date.as_deref().unwrap_or("-");
    let category = summary.category_name.as_deref().unwrap_or("-");
    let tags = if summary.tags.is_empty() {
        "-".to_string()
    } else {
        summary.tags.join(", ")
    };
    format!("{date}\t{}\t{}\t{category}\t{tags}", summary.slug, summary.title)
}
