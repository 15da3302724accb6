use std::collections::BTreeMap;

use log::debug;

use crate::models::Category;
use crate::planner::config::{KeywordRule, PlannerConfig};

fn first_match(item: &str, rules: &[KeywordRule]) -> Option<Category> {
    rules
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|k| item.contains(k.to_lowercase().as_str()))
        })
        .map(|rule| rule.category)
}

/// Map a free-text ingredient to a category.
///
/// Keyword rules are tried in order and the first rule owning a keyword
/// contained in the item wins; the hint rules are tried the same way after
/// them. Unmatched items resolve to [`Category::Other`].
pub fn categorize(item: &str, config: &PlannerConfig) -> Category {
    let item = item.to_lowercase();

    first_match(&item, &config.keywords)
        .or_else(|| first_match(&item, &config.hints))
        .unwrap_or(Category::Other)
}

/// Pantry items grouped by category, pantry order kept within each bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMap {
    buckets: BTreeMap<Category, Vec<String>>,
}

impl CategoryMap {
    /// Items in a category (empty if none).
    pub fn items(&self, category: Category) -> &[String] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count(&self, category: Category) -> usize {
        self.items(category).len()
    }

    /// Total number of indexed items.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// All items across categories.
    pub fn all_items(&self) -> impl Iterator<Item = &String> {
        self.buckets.values().flatten()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.buckets.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Group a pantry by category.
pub fn build_index<S: AsRef<str>>(pantry: &[S], config: &PlannerConfig) -> CategoryMap {
    let mut map = CategoryMap::default();
    for item in pantry {
        let item = item.as_ref();
        let category = categorize(item, config);
        debug!("Categorized '{}' as {}", item, category);
        map.buckets
            .entry(category)
            .or_default()
            .push(item.to_string());
    }
    map
}
