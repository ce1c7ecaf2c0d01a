//! Catalog Listing Page

use catalog_core::{Catalog, CatalogEntry, Category, FilterState};
use leptos::prelude::*;

use crate::components::{AgentCard, AgentModal};

/// `category` comes from the `?category=` query of the current route
#[component]
pub fn AgentsPage(#[prop(into)] category: Signal<Option<Category>>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<CatalogEntry>);
    let select = Callback::new(move |entry: CatalogEntry| selected.set(Some(entry)));
    let close = Callback::new(move |()| selected.set(None));

    // The select can override the category until the query changes again
    let chosen = RwSignal::new(category.get_untracked());
    Effect::new(move |_| chosen.set(category.get()));

    let visible = Memo::new(move |_| {
        let state = FilterState::new(search.get(), chosen.get());
        Catalog::builtin()
            .filter(&state)
            .entries()
            .iter()
            .map(|e| (*e).clone())
            .collect::<Vec<_>>()
    });

    let options = Category::ALL
        .iter()
        .map(|c| view! { <option value=c.slug()>{c.label()}</option> })
        .collect_view();

    let reset = move |_| {
        search.set(String::new());
        chosen.set(None);
    };

    view! {
        <div class="agents">
            <header class="page-header">
                <h1>
                    {move || chosen.get().map_or("All Agents", Category::label)}
                </h1>
                <p>{move || format!("{} agents", visible.with(Vec::len))}</p>
            </header>

            <div class="filters">
                <input
                    type="search"
                    placeholder="Search agents..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || chosen.get().map_or("", Category::slug)
                    on:change=move |ev| chosen.set(event_target_value(&ev).parse().ok())
                >
                    <option value="">"All categories"</option>
                    {options}
                </select>
            </div>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=move || view! {
                    <div class="no-results">
                        <p>"No agents match your search."</p>
                        <button class="btn" on:click=reset>"Clear filters"</button>
                    </div>
                }
            >
                <div class="agent-grid">
                    <For
                        each=move || visible.get()
                        key=|entry| entry.id.clone()
                        children=move |entry| view! { <AgentCard entry=entry on_select=select /> }
                    />
                </div>
            </Show>

            {move || selected.get().map(|entry| view! { <AgentModal entry=entry on_close=close /> })}
        </div>
    }
}
