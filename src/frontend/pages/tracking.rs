//! Consignment tracking page.

use crate::backend::services::TrackingNumber;
use crate::frontend::app::route::Route;
use dioxus::prelude::*;
use dioxus_router::navigator;

/// Tracking number input. Valid numbers navigate to their tracking page.
#[component]
pub fn TrackingForm() -> Element {
    let mut input = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        match TrackingNumber::parse(&input.read()) {
            Ok(number) => {
                error.set(None);
                navigator().push(Route::TrackingDetail {
                    id: number.into_inner(),
                });
            }
            Err(message) => error.set(Some(message)),
        }
    };

    rsx! {
        form { class: "form", onsubmit: on_submit,
            input {
                r#type: "text",
                name: "tracking-number",
                placeholder: "Tracking number, e.g. GV-1234-AB",
                maxlength: "40",
                value: "{input}",
                oninput: move |e| {
                    input.set(e.value());
                    error.set(None);
                },
            }
            div { class: "error-message",
                if let Some(message) = error() {
                    "{message}"
                }
            }
            button { class: "button", r#type: "submit", "Track" }
        }
    }
}

/// Shared by `/track`, `/tracking` and `/tracking/:id`.
#[component]
pub fn TrackingPage(#[props(!optional)] id: Option<String>) -> Element {
    let number = id.as_deref().map(TrackingNumber::parse);

    rsx! {
        div { class: "tracking",
            h1 { "Track a consignment" }

            {
                match number {
                    Some(Ok(number)) => rsx! {
                        section { class: "tracking-result",
                            h2 { "Consignment {number}" }
                            p { "Status updates for this consignment appear here as it moves towards the vault." }
                        }
                    },
                    Some(Err(message)) => rsx! {
                        p { class: "error-message", "{message}" }
                    },
                    None => rsx! {
                        p { "Enter the tracking number from your consignment receipt." }
                    },
                }
            }

            TrackingForm {}
        }
    }
}
