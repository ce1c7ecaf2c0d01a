//! Agent Submission Page

use catalog_core::{AgentSubmissionForm, Category, FormController};
use leptos::prelude::*;

use crate::api;
use crate::components::{FormField, NoticeBanner, field_value};

#[component]
pub fn SubmitPage() -> impl IntoView {
    let form = RwSignal::new(FormController::<AgentSubmissionForm>::new());
    let sending = Signal::derive(move || form.with(|c| c.is_sending()));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(fields)) = form.try_update(FormController::begin_submit) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::send_submission(&fields).await;
            form.update(|c| c.finish_submit(result));
        });
    };
    let dismiss = Callback::new(move |()| {
        form.update(|c| {
            c.take_notices();
        });
    });

    let options = Category::ALL
        .iter()
        .map(|c| view! { <option value=c.slug()>{c.label()}</option> })
        .collect_view();

    view! {
        <div class="submit">
            <h1>"Submit Your Agent"</h1>
            <p class="subtitle">
                "Built an agent our customers should know about? Tell us about it and we'll be in touch."
            </p>

            {move || form.with(|c| c.notices().last().cloned()).map(|notice| view! {
                <NoticeBanner notice=notice on_dismiss=dismiss />
            })}

            <form class="lead-form" on:submit=submit>
                <FormField
                    label="Your name"
                    required=true
                    value=field_value(form, |f| &f.name)
                    on_input=Callback::new(move |v: String| form.update(|c| c.edit(|f| f.name = v)))
                    disabled=sending
                />
                <FormField
                    label="Email"
                    input_type="email"
                    required=true
                    value=field_value(form, |f| &f.email)
                    on_input=Callback::new(move |v: String| form.update(|c| c.edit(|f| f.email = v)))
                    disabled=sending
                />
                <FormField
                    label="Phone"
                    input_type="tel"
                    value=field_value(form, |f| &f.phone)
                    on_input=Callback::new(move |v: String| form.update(|c| c.edit(|f| f.phone = v)))
                    disabled=sending
                />
                <FormField
                    label="Agent name"
                    required=true
                    value=field_value(form, |f| &f.agent_name)
                    on_input=Callback::new(move |v: String| form.update(|c| c.edit(|f| f.agent_name = v)))
                    disabled=sending
                />
                <label class="field">
                    <span>"Category"</span>
                    <select
                        prop:value=move || form.with(|c| c.fields().category.map_or("", Category::slug))
                        disabled=move || sending.get()
                        on:change=move |ev| {
                            let category = event_target_value(&ev).parse::<Category>().ok();
                            form.update(|c| c.edit(|f| f.category = category));
                        }
                    >
                        <option value="">"Choose a category"</option>
                        {options}
                    </select>
                </label>
                <FormField
                    label="Website"
                    input_type="url"
                    value=field_value(form, |f| &f.website)
                    on_input=Callback::new(move |v: String| form.update(|c| c.edit(|f| f.website = v)))
                    disabled=sending
                />
                <FormField
                    label="What does it do?"
                    multiline=true
                    required=true
                    value=field_value(form, |f| &f.description)
                    on_input=Callback::new(move |v: String| form.update(|c| c.edit(|f| f.description = v)))
                    disabled=sending
                />
                <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Submitting..." } else { "Submit Agent" }}
                </button>
            </form>
        </div>
    }
}
