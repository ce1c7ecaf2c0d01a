//! # catalog-core
//!
//! Shared logic for the agent catalog site: the catalog model, filtering,
//! the featured carousel, and the lead-form submission flow.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        catalog-core                           │
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────────────────┐  │
//! │  │   Catalog   │──│   Filter    │  │  FormController      │  │
//! │  │  (static)   │  │  Carousel   │  │  ──▶ MessageRelay    │  │
//! │  └─────────────┘  └─────────────┘  └──────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//!        ▲                    ▲                     ▲
//!   catalog-server       catalog-web            lead-relay
//! ```
//!
//! Everything here is synchronous and UI-toolkit agnostic, except
//! `MessageRelay`, which the email client implements.

pub mod carousel;
pub mod catalog;
pub mod entry;
pub mod error;
pub mod filter;
pub mod lead;
pub mod site;

pub use carousel::{Autoplay, Carousel, Scheduler, Swipe, SwipeTracker};
pub use catalog::{Catalog, CategoryCount};
pub use entry::{CatalogEntry, Category};
pub use error::{CatalogError, Result};
pub use filter::{FilterOutcome, FilterState, filter_entries};
pub use lead::{
    AgentSubmissionForm, ContactForm, FormController, FormKind, LeadForm, MessageRelay, Notice,
    OutboundMessage, SubmitBlocked, SubmitOutcome, ValidationError,
};
pub use site::{Locale, Route, SiteConfig};
