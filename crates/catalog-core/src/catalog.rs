//! Agent Catalog
//!
//! The hand-authored catalog, built once at startup and never mutated.

use serde::Serialize;
use std::sync::LazyLock;

use crate::entry::{CatalogEntry, Category};
use crate::error::{CatalogError, Result};
use crate::filter::{FilterOutcome, FilterState};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(builtin_entries()));

/// Read-only list of catalog entries
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Entry count for one category
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub slug: &'static str,
    pub label: &'static str,
    pub count: usize,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        tracing::debug!(entries = entries.len(), "catalog built");
        Self { entries }
    }

    /// The catalog shipped with the site
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error
    pub fn require(&self, id: &str) -> Result<&CatalogEntry> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownEntry(id.to_string()))
    }

    /// Entries shown in the carousel, in catalog order
    pub fn featured(&self) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.featured).collect()
    }

    pub fn filter(&self, state: &FilterState) -> FilterOutcome<'_> {
        FilterOutcome::from_matches(state.apply(&self.entries))
    }

    /// Number of entries in every category, including empty ones
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                slug: category.slug(),
                label: category.label(),
                count: self.entries.iter().filter(|e| e.category == category).count(),
            })
            .collect()
    }
}

fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "helpdesk-pilot",
            "HelpDesk Pilot",
            "Resolves routine support tickets around the clock and hands complex cases to your team with a full summary.",
            Category::CustomerSupport,
        )
        .with_image("/images/agents/helpdesk-pilot.webp")
        .with_features([
            "Answers from your knowledge base",
            "Escalates with a ready-made case summary",
            "Works in chat, email and web forms",
        ])
        .featured(),
        CatalogEntry::new(
            "voice-concierge",
            "Voice Concierge",
            "Handles inbound calls, books appointments and answers common questions in a natural voice.",
            Category::CustomerSupport,
        )
        .with_image("/images/agents/voice-concierge.webp")
        .with_features(["Calendar booking", "Call transcripts", "After-hours coverage"]),
        CatalogEntry::new(
            "lead-scout",
            "Lead Scout",
            "Researches prospects that fit your ideal customer profile and drafts personalised outreach.",
            Category::SalesMarketing,
        )
        .with_image("/images/agents/lead-scout.webp")
        .with_features([
            "Prospect enrichment",
            "Personalised first-touch emails",
            "CRM sync",
        ])
        .featured(),
        CatalogEntry::new(
            "campaign-writer",
            "Campaign Writer",
            "Produces on-brand copy for ads, landing pages and newsletters from a short brief.",
            Category::SalesMarketing,
        )
        .with_image("/images/agents/campaign-writer.webp"),
        CatalogEntry::new(
            "inbox-zero",
            "Inbox Zero",
            "Triages email, drafts replies in your tone and surfaces what actually needs your attention.",
            Category::Productivity,
        )
        .with_image("/images/agents/inbox-zero.webp")
        .with_features(["Priority triage", "Reply drafts", "Daily digest"])
        .featured(),
        CatalogEntry::new(
            "meeting-scribe",
            "Meeting Scribe",
            "Joins your calls, takes notes and sends action items to the right people afterwards.",
            Category::Productivity,
        )
        .with_image("/images/agents/meeting-scribe.webp")
        .with_features(["Live transcription", "Action item tracking"]),
        CatalogEntry::new(
            "insight-analyst",
            "Insight Analyst",
            "Answers business questions in plain English by querying your warehouse and charting the results.",
            Category::DataAnalytics,
        )
        .with_image("/images/agents/insight-analyst.webp")
        .with_features([
            "Natural-language SQL",
            "Automatic charts",
            "Scheduled reports",
        ])
        .featured(),
        CatalogEntry::new(
            "churn-radar",
            "Churn Radar",
            "Flags accounts at risk of cancelling and suggests the next best action for each one.",
            Category::DataAnalytics,
        ),
        CatalogEntry::new(
            "code-reviewer",
            "Code Reviewer",
            "Reviews pull requests for bugs, style and security issues before a human takes a look.",
            Category::SoftwareDevelopment,
        )
        .with_image("/images/agents/code-reviewer.webp")
        .with_features([
            "Inline review comments",
            "Security checks",
            "Works with GitHub and GitLab",
        ])
        .featured(),
        CatalogEntry::new(
            "test-smith",
            "Test Smith",
            "Writes and maintains unit tests for untested code paths in your repository.",
            Category::SoftwareDevelopment,
        )
        .with_image("/images/agents/test-smith.webp"),
        CatalogEntry::new(
            "ledger-bot",
            "LedgerBot",
            "Reconciles invoices against bank feeds and prepares month-end close checklists.",
            Category::FinanceOperations,
        )
        .with_image("/images/agents/ledger-bot.webp")
        .with_features(["Bank reconciliation", "Invoice matching", "Close checklists"]),
        CatalogEntry::new(
            "procure-assist",
            "Procure Assist",
            "Collects supplier quotes, compares terms and routes purchase requests for approval.",
            Category::FinanceOperations,
        ),
    ]
}
