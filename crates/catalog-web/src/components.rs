//! UI Components

use std::time::Duration;

use catalog_core::{
    Autoplay, Carousel, CatalogEntry, Category, FormController, LeadForm, Notice, Route,
    Scheduler, SiteConfig, SwipeTracker, carousel::AUTOPLAY_INTERVAL,
};
use leptos::prelude::*;

/// Set the document title and `lang` attribute for a page
pub fn set_page_meta(site: &SiteConfig, route: Route) {
    let document = document();
    document.set_title(&site.page_title(&route));
    if let Some(root) = document.document_element() {
        if let Err(err) = root.set_attribute("lang", site.locale.tag()) {
            leptos::logging::warn!("could not set document language: {err:?}");
        }
    }
}

/// Site-wide navigation
#[component]
pub fn NavBar(site: StoredValue<SiteConfig>) -> impl IntoView {
    let links = Route::NAV
        .iter()
        .filter(|r| **r != Route::Home)
        .map(|route| view! { <a href=route.href() class="nav-link">{route.heading()}</a> })
        .collect_view();

    let categories = Category::ALL
        .iter()
        .map(|c| view! { <a href=Route::Agents(Some(*c)).href()>{c.label()}</a> })
        .collect_view();

    view! {
        <nav class="navbar">
            <a href="/" class="brand">{site.with_value(|s| s.name.clone())}</a>
            <div class="nav-links">{links}</div>
            <details class="nav-categories">
                <summary>"Categories"</summary>
                <div class="dropdown">{categories}</div>
            </details>
        </nav>
    }
}

/// Site-wide footer
#[component]
pub fn Footer(site: StoredValue<SiteConfig>) -> impl IntoView {
    let (name, email) = site.with_value(|s| (s.name.clone(), s.contact_email.clone()));
    let mailto = format!("mailto:{email}");
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="footer">
            <p>"© " {year} " " {name}</p>
            <p><a href=mailto>{email}</a></p>
            <p>
                <a href=Route::About.href()>"About"</a>
                " · "
                <a href=Route::Submit.href()>"List your agent"</a>
            </p>
        </footer>
    }
}

/// Catalog card; clicking opens the detail modal
#[component]
pub fn AgentCard(entry: CatalogEntry, on_select: Callback<CatalogEntry>) -> impl IntoView {
    let CatalogEntry {
        title,
        description,
        category,
        image,
        ..
    } = entry.clone();
    let alt = title.clone();

    view! {
        <article class="agent-card" on:click=move |_| on_select.run(entry.clone())>
            {image.map(|src| view! { <img src=src alt=alt loading="lazy" /> })}
            <span class="badge">{category.label()}</span>
            <h3>{title}</h3>
            <p>{description}</p>
        </article>
    }
}

/// Detail view for a single agent
#[component]
pub fn AgentModal(entry: CatalogEntry, on_close: Callback<()>) -> impl IntoView {
    let features = entry
        .features
        .iter()
        .map(|f| view! { <li>{f.clone()}</li> })
        .collect_view();
    let alt = entry.title.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                {entry.image.map(|src| view! { <img src=src alt=alt /> })}
                <span class="badge">{entry.category.label()}</span>
                <h2>{entry.title}</h2>
                <p>{entry.description}</p>
                <ul class="features">{features}</ul>
                <a href=Route::Contact.href() class="btn btn-primary">"Request a demo"</a>
            </div>
        </div>
    }
}

/// Browser interval driving [`Carousel::tick`]
struct IntervalScheduler {
    carousel: RwSignal<Carousel>,
}

impl Scheduler for IntervalScheduler {
    type Handle = Option<IntervalHandle>;

    fn start(&mut self, period: Duration) -> Self::Handle {
        let carousel = self.carousel;
        set_interval_with_handle(move || carousel.update(Carousel::tick), period).ok()
    }

    fn stop(&mut self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

/// Rotating showcase of the featured set
#[component]
pub fn FeaturedCarousel(entries: Vec<CatalogEntry>, on_select: Callback<CatalogEntry>) -> impl IntoView {
    let len = entries.len();
    let entries = StoredValue::new(entries);
    let carousel = RwSignal::new(Carousel::new(len));
    let swipe = StoredValue::new(SwipeTracker::new());
    let autoplay = StoredValue::new_local(Autoplay::new(
        IntervalScheduler { carousel },
        AUTOPLAY_INTERVAL,
    ));

    // Re-arm or cancel the interval whenever hover changes autoplay
    Effect::new(move |_| {
        let enabled = carousel.with(Carousel::autoplay_enabled);
        autoplay.update_value(|a| a.sync(enabled));
    });
    on_cleanup(move || {
        autoplay.try_update_value(Autoplay::shutdown);
    });

    let current = move || entries.with_value(|e| e.get(carousel.with(Carousel::index)).cloned());

    let dots = (0..len)
        .map(|i| {
            view! {
                <button
                    class="dot"
                    class:active=move || carousel.with(Carousel::index) == i
                    aria-label=format!("Show slide {}", i + 1)
                    on:click=move |_| {
                        carousel.update(|c| {
                            c.go_to(i);
                        });
                    }
                />
            }
        })
        .collect_view();

    view! {
        <Show when=move || { len > 0 }>
            <section
                class="carousel"
                on:mouseenter=move |_| carousel.update(Carousel::hover_start)
                on:mouseleave=move |_| carousel.update(Carousel::hover_end)
                on:touchstart=move |ev| {
                    if let Some(touch) = ev.touches().get(0) {
                        swipe.update_value(|s| s.begin(f64::from(touch.client_x())));
                    }
                }
                on:touchend=move |ev| {
                    let Some(touch) = ev.changed_touches().get(0) else {
                        swipe.update_value(SwipeTracker::cancel);
                        return;
                    };
                    let gesture = swipe
                        .try_update_value(|s| s.end(f64::from(touch.client_x())))
                        .flatten();
                    if let Some(gesture) = gesture {
                        carousel.update(|c| c.apply_swipe(gesture));
                    }
                }
            >
                <button class="carousel-prev" aria-label="Previous" on:click=move |_| carousel.update(Carousel::previous)>
                    "‹"
                </button>
                {move || current().map(|entry| {
                    let selected = entry.clone();
                    let alt = entry.title.clone();
                    view! {
                        <article class="slide" on:click=move |_| on_select.run(selected.clone())>
                            {entry.image.map(|src| view! { <img src=src alt=alt /> })}
                            <span class="badge">{entry.category.label()}</span>
                            <h3>{entry.title}</h3>
                            <p>{entry.description}</p>
                        </article>
                    }
                })}
                <button class="carousel-next" aria-label="Next" on:click=move |_| carousel.update(Carousel::next)>
                    "›"
                </button>
            </section>
        </Show>
        <div class="carousel-dots">{dots}</div>
    }
}

/// Transient submission feedback
#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: Callback<()>) -> impl IntoView {
    let class = if notice.is_error() { "notice notice-error" } else { "notice notice-success" };

    view! {
        <div class=class role="status">
            <span>{notice.text()}</span>
            <button aria-label="Dismiss" on:click=move |_| on_dismiss.run(())>"×"</button>
        </div>
    }
}

/// Reactive view of one text field of a form
pub fn field_value<F>(form: RwSignal<FormController<F>>, get: fn(&F) -> &String) -> Signal<String>
where
    F: LeadForm + Send + Sync + 'static,
{
    Signal::derive(move || form.with(|c| get(c.fields()).clone()))
}

/// Labelled text input or textarea
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let field = if multiline {
        view! {
            <textarea
                rows="5"
                required=required
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                required=required
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="field">
            <span>{label}{required.then_some(" *")}</span>
            {field}
        </label>
    }
}
