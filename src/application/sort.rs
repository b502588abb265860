use std::{cmp::Ordering, collections::HashSet, fmt, str::FromStr};

use crate::domain::content::ContentItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Date,
    Weight,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Date => f.write_str("date"),
            SortOrder::Weight => f.write_str("weight"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "date" => Ok(SortOrder::Date),
            "weight" => Ok(SortOrder::Weight),
            other => Err(format!("unknown sort order `{other}`")),
        }
    }
}

pub fn sort_items(items: Vec<&ContentItem>, order: SortOrder) -> Vec<&ContentItem> {
    match order {
        SortOrder::Date => sort_by_date(items),
        SortOrder::Weight => sort_by_weight(items),
    }
}

/// Newest first. Undated items go last in their original order.
pub fn sort_by_date(mut items: Vec<&ContentItem>) -> Vec<&ContentItem> {
    items.sort_by(|a, b| match (a.date, b.date) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    items
}

/// Weighted items ascending by weight, then the rest in original order.
/// Repeated slugs keep only their first placement.
pub fn sort_by_weight(items: Vec<&ContentItem>) -> Vec<&ContentItem> {
    let (mut weighted, unweighted): (Vec<_>, Vec<_>) = items
        .into_iter()
        .partition(|item| item.effective_weight().is_some());
    weighted.sort_by_key(|item| item.effective_weight());

    let mut seen = HashSet::new();
    weighted
        .into_iter()
        .chain(unweighted)
        .filter(|item| seen.insert(item.slug.as_str()))
        .collect()
}
