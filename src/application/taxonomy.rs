use std::{fmt, str::FromStr};

use crate::domain::{content::ContentItem, slug::taxonomy_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    Category,
    Tags,
}

impl Taxonomy {
    pub fn as_str(self) -> &'static str {
        match self {
            Taxonomy::Category => "category",
            Taxonomy::Tags => "tags",
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Taxonomy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "category" | "categories" => Ok(Taxonomy::Category),
            "tag" | "tags" => Ok(Taxonomy::Tags),
            other => Err(format!("unknown taxonomy `{other}`")),
        }
    }
}

/// Items whose category (or any tag) slugifies to `key`, ignoring case.
///
/// Input order is preserved.
pub fn filter_by_taxonomy<'a>(
    items: &'a [ContentItem],
    taxonomy: Taxonomy,
    key: &str,
) -> Vec<&'a ContentItem> {
    let wanted = key.to_lowercase();
    let matches = |label: &String| taxonomy_key(label) == wanted;

    items
        .iter()
        .filter(|item| match taxonomy {
            Taxonomy::Category => item.category.as_ref().is_some_and(matches),
            Taxonomy::Tags => item.tags.iter().any(matches),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<ContentItem> {
        vec![
            ContentItem::new("glue")
                .with_category("cloud_devops")
                .with_tags(["AWS Glue", "Spark"]),
            ContentItem::new("duckdb")
                .with_category("DE")
                .with_tags(["DuckDB", "sql"]),
            ContentItem::new("untagged"),
        ]
    }

    #[test]
    fn category_match_uses_slugified_label() {
        let items = items();
        let found = filter_by_taxonomy(&items, Taxonomy::Category, "Cloud-DevOps");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "glue");
    }

    #[test]
    fn tag_match_checks_every_tag() {
        let items = items();
        let found = filter_by_taxonomy(&items, Taxonomy::Tags, "aws-glue");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "glue");

        let sql = filter_by_taxonomy(&items, Taxonomy::Tags, "SQL");
        assert_eq!(sql[0].slug, "duckdb");
    }

    #[test]
    fn missing_fields_never_match() {
        let items = items();
        assert!(filter_by_taxonomy(&items, Taxonomy::Tags, "").is_empty());
        assert!(filter_by_taxonomy(&items, Taxonomy::Category, "python").is_empty());
    }

    #[test]
    fn parses_taxonomy_names() {
        assert_eq!("Tags".parse::<Taxonomy>(), Ok(Taxonomy::Tags));
        assert_eq!("category".parse::<Taxonomy>(), Ok(Taxonomy::Category));
        assert!("authors".parse::<Taxonomy>().is_err());
    }
}
