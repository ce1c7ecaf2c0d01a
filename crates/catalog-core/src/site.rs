//! Site Configuration and Routes
//!
//! Configuration is passed explicitly to the views that need it. There is a
//! single locale; nothing looks it up from ambient state.

use serde::{Deserialize, Serialize};

use crate::entry::Category;

/// Display language of the site
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
}

impl Locale {
    /// Value for the `lang` attribute
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
        }
    }
}

/// Branding and contact details shown across the site
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub contact_email: String,
    #[serde(default)]
    pub locale: Locale,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Agent Showcase".into(),
            tagline: "AI agents that take work off your plate".into(),
            contact_email: "hello@agentshowcase.example".into(),
            locale: Locale::En,
        }
    }
}

impl SiteConfig {
    /// Document title for a page
    pub fn page_title(&self, route: &Route) -> String {
        match route {
            Route::Home => format!("{} | {}", self.name, self.tagline),
            other => format!("{} | {}", other.heading(), self.name),
        }
    }
}

/// Pages of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Agents(Option<Category>),
    About,
    Contact,
    Submit,
    NotFound,
}

impl Route {
    /// Entries for the navigation bar
    pub const NAV: [Self; 5] = [
        Self::Home,
        Self::Agents(None),
        Self::About,
        Self::Contact,
        Self::Submit,
    ];

    /// Resolve a path and optional `category` query value
    pub fn resolve(path: &str, category: Option<&str>) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/agents" => Self::Agents(category.and_then(|c| c.parse().ok())),
            "/about" => Self::About,
            "/contact" => Self::Contact,
            "/submit" => Self::Submit,
            _ => Self::NotFound,
        }
    }

    /// Link target, including the category query when set
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Agents(None) => "/agents".into(),
            Self::Agents(Some(category)) => format!("/agents?category={}", category.slug()),
            Self::About => "/about".into(),
            Self::Contact => "/contact".into(),
            Self::Submit => "/submit".into(),
            Self::NotFound => "/404".into(),
        }
    }

    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Agents(_) => "Agents",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Submit => "Submit an Agent",
            Self::NotFound => "Page Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Route::resolve("/", None), Route::Home);
        assert_eq!(Route::resolve("/agents", None), Route::Agents(None));
        assert_eq!(
            Route::resolve("/agents/", Some("productivity")),
            Route::Agents(Some(Category::Productivity))
        );
        assert_eq!(Route::resolve("/agents", Some("bogus")), Route::Agents(None));
        assert_eq!(Route::resolve("/pricing", None), Route::NotFound);
    }

    #[test]
    fn test_nav_links_resolve_to_their_route() {
        for route in Route::NAV {
            let href = route.href();
            assert_eq!(Route::resolve(&href, None), route, "{href}");
        }
        for category in Category::ALL {
            let route = Route::Agents(Some(category));
            assert_eq!(Route::resolve("/agents", Some(category.slug())), route);
        }
    }

    #[test]
    fn test_href_round_trips_category() {
        let route = Route::Agents(Some(Category::DataAnalytics));
        assert_eq!(route.href(), "/agents?category=data-analytics");
    }

    #[test]
    fn test_page_title() {
        let site = SiteConfig::default();
        assert_eq!(site.page_title(&Route::Contact), "Contact | Agent Showcase");
        assert!(site.page_title(&Route::Home).starts_with("Agent Showcase | "));
    }
}
