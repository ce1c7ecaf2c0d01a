//! Catalog Entries
//!
//! The record describing one listed agent, and the fixed set of categories
//! agents are grouped under.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CatalogError;

/// Category an agent is listed under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CustomerSupport,
    SalesMarketing,
    Productivity,
    DataAnalytics,
    SoftwareDevelopment,
    FinanceOperations,
}

impl Category {
    /// Every category, in navigation order
    pub const ALL: [Self; 6] = [
        Self::CustomerSupport,
        Self::SalesMarketing,
        Self::Productivity,
        Self::DataAnalytics,
        Self::SoftwareDevelopment,
        Self::FinanceOperations,
    ];

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::CustomerSupport => "Customer Support",
            Self::SalesMarketing => "Sales & Marketing",
            Self::Productivity => "Productivity",
            Self::DataAnalytics => "Data & Analytics",
            Self::SoftwareDevelopment => "Software Development",
            Self::FinanceOperations => "Finance & Operations",
        }
    }

    /// Slug used in the `category` query parameter
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CustomerSupport => "customer-support",
            Self::SalesMarketing => "sales-marketing",
            Self::Productivity => "productivity",
            Self::DataAnalytics => "data-analytics",
            Self::SoftwareDevelopment => "software-development",
            Self::FinanceOperations => "finance-operations",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts either the slug or the label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// One listed agent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier, also used in links
    pub id: String,

    /// Display title
    pub title: String,

    /// Description shown on cards and in the detail modal
    pub description: String,

    /// Category the agent is listed under
    pub category: Category,

    /// Path of the card image, relative to the static root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Feature bullet points, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,

    /// Whether the agent belongs to the featured set
    #[serde(default)]
    pub featured: bool,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            image: None,
            features: Vec::new(),
            featured: false,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Case-insensitive substring match against title, description and
    /// category label. An empty needle matches every entry.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        [self.title.as_str(), self.description.as_str(), self.category.label()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("sales-marketing".parse::<Category>().unwrap(), Category::SalesMarketing);
        assert_eq!("Data & Analytics".parse::<Category>().unwrap(), Category::DataAnalytics);
        assert_eq!("PRODUCTIVITY".parse::<Category>().unwrap(), Category::Productivity);
        assert!("gardening".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_as_slug() {
        let json = serde_json::to_string(&Category::FinanceOperations).unwrap();
        assert_eq!(json, "\"finance-operations\"");
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json.as_str(), Some(category.slug()));
        }
    }

    #[test]
    fn test_matches_text() {
        let entry = CatalogEntry::new(
            "ledger-bot",
            "LedgerBot",
            "Reconciles invoices overnight",
            Category::FinanceOperations,
        );

        assert!(entry.matches_text(""));
        assert!(entry.matches_text("ledger"));
        assert!(entry.matches_text("INVOICES"));
        assert!(entry.matches_text("finance &"));
        assert!(!entry.matches_text("marketing"));
    }
}
