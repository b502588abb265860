//! Content items as published by the blog collection.

use std::path::PathBuf;

use serde::Serialize;
use time::Date;

pub const DEFAULT_AUTHOR: &str = "Admin";
pub const DEFAULT_CATEGORY: &str = "Others";
pub const DEFAULT_TAG: &str = "Others";

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A published piece of content, identified by its slug.
///
/// Only `slug`, `category` and `tags` take part in ranking and taxonomy
/// lookups; the remaining fields are carried for listing and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub slug: String,
    pub title: String,
    /// Overrides `title` in page metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "iso_date::option::serialize"
    )]
    pub date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub draft: bool,
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl ContentItem {
    /// Minimal item with no category, tags or display metadata.
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: slug.clone(),
            slug,
            meta_title: None,
            category: None,
            tags: Vec::new(),
            description: None,
            date: None,
            weight: None,
            author: None,
            image: None,
            draft: false,
            source: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Weight used for manual ordering. Zero counts as unweighted.
    pub fn effective_weight(&self) -> Option<i64> {
        self.weight.filter(|weight| *weight != 0)
    }
}

pub fn find_by_slug<'a>(items: &'a [ContentItem], slug: &str) -> Option<&'a ContentItem> {
    items.iter().find(|item| item.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_ranking_fields() {
        let item = ContentItem::new("duckdb")
            .with_category("DE")
            .with_tags(["sql", "duckdb"]);

        assert_eq!(item.slug, "duckdb");
        assert_eq!(item.title, "duckdb");
        assert_eq!(item.category.as_deref(), Some("DE"));
        assert!(item.has_tag("sql"));
        assert!(!item.has_tag("spark"));
    }

    #[test]
    fn zero_weight_is_unweighted() {
        assert_eq!(ContentItem::new("a").with_weight(0).effective_weight(), None);
        assert_eq!(ContentItem::new("a").with_weight(2).effective_weight(), Some(2));
    }

    #[test]
    fn find_by_slug_matches_exactly() {
        let items = vec![ContentItem::new("a"), ContentItem::new("b")];
        assert_eq!(find_by_slug(&items, "b").map(|item| item.slug.as_str()), Some("b"));
        assert!(find_by_slug(&items, "B").is_none());
    }
}
