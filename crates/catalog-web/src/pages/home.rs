//! Home Page

use catalog_core::{Catalog, CatalogEntry, Route, SiteConfig};
use leptos::prelude::*;

use crate::components::{AgentModal, FeaturedCarousel};

#[component]
pub fn HomePage(site: StoredValue<SiteConfig>) -> impl IntoView {
    let catalog = Catalog::builtin();
    let featured: Vec<CatalogEntry> = catalog.featured().into_iter().cloned().collect();
    let selected = RwSignal::new(None::<CatalogEntry>);
    let select = Callback::new(move |entry: CatalogEntry| selected.set(Some(entry)));
    let close = Callback::new(move |()| selected.set(None));
    let (name, tagline) = site.with_value(|s| (s.name.clone(), s.tagline.clone()));

    let categories = catalog
        .category_counts()
        .into_iter()
        .map(|count| {
            view! {
                <a class="category-tile" href=Route::Agents(Some(count.category)).href()>
                    <h3>{count.label}</h3>
                    <span>{format!("{} agents", count.count)}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="home">
            <header class="hero">
                <h1>{name}</h1>
                <p class="tagline">{tagline}</p>
                <div class="cta">
                    <a href=Route::Agents(None).href() class="btn btn-primary">"Browse Agents"</a>
                    <a href=Route::Contact.href() class="btn">"Talk to Us"</a>
                </div>
            </header>

            <section class="featured">
                <h2>"Featured Agents"</h2>
                <FeaturedCarousel entries=featured on_select=select />
            </section>

            <section class="categories">
                <h2>"Browse by Category"</h2>
                <div class="category-grid">{categories}</div>
            </section>

            {move || selected.get().map(|entry| view! { <AgentModal entry=entry on_close=close /> })}
        </div>
    }
}
