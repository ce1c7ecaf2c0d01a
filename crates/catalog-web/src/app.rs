//! Main App Component

use catalog_core::{Route, SiteConfig};
use leptos::prelude::*;
use leptos_router::{components::Router, hooks::use_location};

use crate::components::{Footer, NavBar, set_page_meta};
use crate::pages::{AboutPage, AgentsPage, ContactPage, HomePage, NotFoundPage, SubmitPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let site = StoredValue::new(SiteConfig::default());

    view! {
        <Router>
            <NavBar site=site />
            <main class="app">
                <Pages site=site />
            </main>
            <Footer site=site />
        </Router>
    }
}

/// Renders the page for the current location via [`Route::resolve`]
#[component]
fn Pages(site: StoredValue<SiteConfig>) -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| {
        let category = location.query.with(|q| q.get("category"));
        location
            .pathname
            .with(|path| Route::resolve(path, category.as_deref()))
    });

    // A category change re-filters the listing instead of remounting it
    let page = Memo::new(move |_| match route.get() {
        Route::Agents(_) => Route::Agents(None),
        other => other,
    });
    let category = Signal::derive(move || match route.get() {
        Route::Agents(category) => category,
        _ => None,
    });

    Effect::new(move |_| {
        let route = route.get();
        site.with_value(|s| set_page_meta(s, route));
    });

    move || match page.get() {
        Route::Home => view! { <HomePage site=site /> }.into_any(),
        Route::Agents(_) => view! { <AgentsPage category=category /> }.into_any(),
        Route::About => view! { <AboutPage site=site /> }.into_any(),
        Route::Contact => view! { <ContactPage site=site /> }.into_any(),
        Route::Submit => view! { <SubmitPage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}
