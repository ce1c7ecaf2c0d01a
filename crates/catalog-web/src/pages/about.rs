//! About Page

use catalog_core::{Catalog, Route, SiteConfig};
use leptos::prelude::*;

#[component]
pub fn AboutPage(site: StoredValue<SiteConfig>) -> impl IntoView {
    let name = site.with_value(|s| s.name.clone());
    let agents = Catalog::builtin().len();

    view! {
        <div class="about">
            <h1>"About " {name}</h1>
            <p>
                "We build and curate AI agents that handle the repetitive parts of support, "
                "sales, operations and engineering work, so your team can focus on the rest."
            </p>
            <p>{format!("Our catalog lists {agents} agents across six categories.")}</p>

            <section class="features">
                <div class="feature">
                    <h3>"Vetted"</h3>
                    <p>"Every agent is reviewed before it is listed."</p>
                </div>
                <div class="feature">
                    <h3>"Integrated"</h3>
                    <p>"Agents plug into the tools you already use."</p>
                </div>
                <div class="feature">
                    <h3>"Supported"</h3>
                    <p>"Our team helps you roll out and tune each agent."</p>
                </div>
            </section>

            <div class="cta">
                <a href=Route::Agents(None).href() class="btn btn-primary">"Browse Agents"</a>
                <a href=Route::Submit.href() class="btn">"List Your Agent"</a>
            </div>
        </div>
    }
}
