//! Contact Page

use catalog_core::{ContactForm, FormController, SiteConfig};
use leptos::prelude::*;

use crate::api;
use crate::components::{FormField, NoticeBanner, field_value};

#[component]
pub fn ContactPage(site: StoredValue<SiteConfig>) -> impl IntoView {
    let form = RwSignal::new(FormController::<ContactForm>::new());
    let sending = Signal::derive(move || form.with(|c| c.is_sending()));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Refused while a send is in flight or when validation fails
        let Some(Ok(fields)) = form.try_update(FormController::begin_submit) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::send_contact(&fields).await;
            form.update(|c| c.finish_submit(result));
        });
    };
    let dismiss = Callback::new(move |()| {
        form.update(|c| {
            c.take_notices();
        });
    });

    let email = site.with_value(|s| s.contact_email.clone());

    view! {
        <div class="contact">
            <h1>"Contact Us"</h1>
            <p class="subtitle">
                "Questions about an agent, pricing or a custom build? Write to us at "
                <a href=format!("mailto:{email}")>{email.clone()}</a>
                " or use the form below."
            </p>

            {move || form.with(|c| c.notices().last().cloned()).map(|notice| view! {
                <NoticeBanner notice=notice on_dismiss=dismiss />
            })}

            <form class="lead-form" on:submit=submit>
                <FormField
                    label="Name"
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
                    label="Message"
                    multiline=true
                    required=true
                    value=field_value(form, |f| &f.message)
                    on_input=Callback::new(move |v: String| form.update(|c| c.edit(|f| f.message = v)))
                    disabled=sending
                />
                <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
