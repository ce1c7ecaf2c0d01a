//! Catalog Filter
//!
//! Derives the visible subset of the catalog from free-text search and an
//! optional category selector. Filtering is stable: the source order is kept
//! and nothing is re-sorted.

use serde::{Deserialize, Serialize};

use crate::entry::{CatalogEntry, Category};

/// Current search text and category selection, owned by the view layer
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search, matched case-insensitively
    #[serde(default, rename = "q")]
    pub search: String,

    /// Selected category, `None` for all categories
    #[serde(default)]
    pub category: Option<Category>,
}

impl FilterState {
    pub fn new(search: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    pub fn with_category(category: Category) -> Self {
        Self::new("", Some(category))
    }

    /// True when nothing narrows the listing
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.category.is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a single entry passes both the text and category filters
    pub fn accepts(&self, entry: &CatalogEntry) -> bool {
        let category_ok = self.category.is_none_or(|c| c == entry.category);
        category_ok && entry.matches_text(&self.search)
    }

    /// Apply to a list of entries, keeping their order
    pub fn apply<'a, I>(&self, entries: I) -> Vec<&'a CatalogEntry>
    where
        I: IntoIterator<Item = &'a CatalogEntry>,
    {
        entries.into_iter().filter(|e| self.accepts(e)).collect()
    }
}

/// Result of filtering, distinguishing the explicit "no results" state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
    /// At least one entry matched
    Matches(Vec<&'a CatalogEntry>),
    /// Nothing matched; the caller shows a "no results" message
    NoResults,
}

impl<'a> FilterOutcome<'a> {
    pub fn from_matches(matches: Vec<&'a CatalogEntry>) -> Self {
        if matches.is_empty() {
            Self::NoResults
        } else {
            Self::Matches(matches)
        }
    }

    pub fn entries(&self) -> &[&'a CatalogEntry] {
        match self {
            Self::Matches(entries) => entries,
            Self::NoResults => &[],
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoResults)
    }
}

/// Filter `entries` by `search` and `category`
pub fn filter_entries<'a>(
    entries: &'a [CatalogEntry],
    search: &str,
    category: Option<Category>,
) -> FilterOutcome<'a> {
    let state = FilterState::new(search, category);
    FilterOutcome::from_matches(state.apply(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn sample() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("a", "HelpDesk Pilot", "Answers support tickets", Category::CustomerSupport),
            CatalogEntry::new("b", "Lead Scout", "Finds prospects for your sales team", Category::SalesMarketing),
            CatalogEntry::new("c", "Inbox Zero", "Triages email and drafts replies", Category::Productivity),
            CatalogEntry::new("d", "Churn Radar", "Predicts which customers need support", Category::DataAnalytics),
        ]
    }

    fn ids(outcome: &FilterOutcome<'_>) -> Vec<String> {
        outcome.entries().iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_empty_search_matches_all() {
        let entries = sample();
        let outcome = filter_entries(&entries, "", None);
        assert_eq!(ids(&outcome), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let entries = sample();
        let outcome = filter_entries(&entries, "SUPPORT", None);
        assert_eq!(ids(&outcome), vec!["a", "d"]);
    }

    #[test]
    fn test_search_matches_category_label() {
        let entries = sample();
        let outcome = filter_entries(&entries, "analytics", None);
        assert_eq!(ids(&outcome), vec!["d"]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let entries = sample();
        let outcome = filter_entries(&entries, "support", Some(Category::CustomerSupport));
        assert_eq!(ids(&outcome), vec!["a"]);

        let outcome = filter_entries(&entries, "", Some(Category::Productivity));
        assert_eq!(ids(&outcome), vec!["c"]);
    }

    #[test]
    fn test_no_results_state() {
        let entries = sample();
        let outcome = filter_entries(&entries, "blockchain", None);
        assert_eq!(outcome, FilterOutcome::NoResults);
        assert!(outcome.is_empty());
        assert!(outcome.entries().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut state = FilterState::new("inbox", Some(Category::Productivity));
        assert!(!state.is_unfiltered());
        state.reset();
        assert!(state.is_unfiltered());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn category_strategy() -> impl Strategy<Value = Option<Category>> {
            prop_oneof![
                Just(None),
                (0..Category::ALL.len()).prop_map(|i| Some(Category::ALL[i])),
            ]
        }

        proptest! {
            /// Every returned entry satisfies both filters.
            #[test]
            fn results_satisfy_filter(search in "[a-zA-Z &]{0,6}", category in category_strategy()) {
                let catalog = Catalog::builtin();
                let outcome = filter_entries(catalog.entries(), &search, category);
                let needle = search.to_lowercase();

                for entry in outcome.entries() {
                    let hit = entry.title.to_lowercase().contains(&needle)
                        || entry.description.to_lowercase().contains(&needle)
                        || entry.category.label().to_lowercase().contains(&needle);
                    prop_assert!(hit);
                    if let Some(c) = category {
                        prop_assert_eq!(entry.category, c);
                    }
                }
            }

            /// Filtering a filtered result again changes nothing.
            #[test]
            fn filtering_is_idempotent(search in "[a-z ]{0,4}", category in category_strategy()) {
                let catalog = Catalog::builtin();
                let state = FilterState::new(search, category);
                let once = state.apply(catalog.entries());
                let twice = state.apply(once.iter().copied());
                prop_assert_eq!(once, twice);
            }

            /// Results are a subsequence of the source list.
            #[test]
            fn order_is_preserved(search in "[a-z]{0,3}") {
                let catalog = Catalog::builtin();
                let outcome = filter_entries(catalog.entries(), &search, None);
                let positions: Vec<usize> = outcome
                    .entries()
                    .iter()
                    .filter_map(|e| catalog.entries().iter().position(|x| x.id == e.id))
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
