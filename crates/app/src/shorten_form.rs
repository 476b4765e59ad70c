use dioxus::prelude::*;
use shared_types::{
    FormPayload, ShortenLinkForm, FORM_ELEMENT_ID, FULL_URL_FIELD, RESULT_ELEMENT_ID, TTL_FIELD,
};

use crate::submit::submit_form;
use crate::transport::HttpTransport;

/// The part of a submit event the form handler relies on.
pub trait SubmitEvent {
    /// Stop the browser's own submission and navigation.
    fn prevent_default(&self);
}

impl SubmitEvent for FormEvent {
    fn prevent_default(&self) {
        Event::<FormData>::prevent_default(self);
    }
}

/// Start a submission: suppress the default action, whatever the fields
/// hold, then snapshot them for the request.
fn begin_submission(evt: &impl SubmitEvent, full_url: String, ttl: String) -> FormPayload {
    evt.prevent_default();
    ShortenLinkForm::new(full_url, ttl).to_payload()
}

/// Shorten form. Posts the URL (and optional lifetime) to the shortener
/// and shows the returned code, or the error, in the result region.
///
/// The form and the result region are rendered together, so the submit
/// handler always has both to work with.
#[component]
pub fn ShortenForm() -> Element {
    let mut full_url = use_signal(String::new);
    let mut ttl = use_signal(String::new);
    let result = use_signal(String::new);
    let transport = use_hook(HttpTransport::for_page);

    let handle_submit = move |evt: FormEvent| {
        let payload = begin_submission(&evt, full_url(), ttl());
        let transport = transport.clone();
        async move {
            submit_form(&transport, &payload, result).await;
        }
    };

    rsx! {
        div { class: "shorten-page",
            h1 { "Shorten a link" }

            form { id: FORM_ELEMENT_ID, onsubmit: handle_submit,
                div { class: "shorten-field",
                    label { r#for: FULL_URL_FIELD, "URL" }
                    input {
                        r#type: "text",
                        id: FULL_URL_FIELD,
                        name: FULL_URL_FIELD,
                        placeholder: "https://example.com/some/long/path",
                        value: full_url(),
                        oninput: move |e: FormEvent| full_url.set(e.value()),
                    }
                }
                div { class: "shorten-field",
                    label { r#for: TTL_FIELD, "Lifetime (seconds)" }
                    input {
                        r#type: "number",
                        id: TTL_FIELD,
                        name: TTL_FIELD,
                        min: "1",
                        placeholder: "3600",
                        value: ttl(),
                        oninput: move |e: FormEvent| ttl.set(e.value()),
                    }
                }
                button { r#type: "submit", class: "button", "Shorten" }
            }

            div { id: RESULT_ELEMENT_ID, "{result}" }
        }
    }
}
