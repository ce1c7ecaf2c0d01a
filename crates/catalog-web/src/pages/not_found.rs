//! Not Found Page

use catalog_core::Route;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for doesn't exist."</p>
            <a href=Route::Home.href() class="btn btn-primary">"Back to home"</a>
        </div>
    }
}
