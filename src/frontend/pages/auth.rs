//! Sign-in page.

use crate::backend::api::Credentials;
use crate::backend::api::auth::login_failure_message;
use crate::frontend::app::route::Route;
use crate::frontend::services::SessionHandle;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Auth() -> Element {
    let session = use_context::<SessionHandle>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        if submitting() {
            return;
        }

        let credentials = match Credentials::parse(&email.read(), &password.read()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        error.set(None);
        submitting.set(true);
        let session = session.clone();
        spawn(async move {
            // On success the session is invalidated and the public guard
            // moves the user to their landing page.
            if let Err(e) = session.login(&credentials).await {
                error.set(Some(login_failure_message(&e)));
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            h1 { "Sign in to GoldVault" }
            p { "Manage your holdings, storage and consignments." }

            form { class: "form", onsubmit: on_submit,
                input {
                    r#type: "email",
                    name: "email",
                    placeholder: "Email address",
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |e| {
                        email.set(e.value());
                        error.set(None);
                    },
                }
                input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |e| {
                        password.set(e.value());
                        error.set(None);
                    },
                }
                div { class: "error-message",
                    if let Some(message) = error() {
                        "{message}"
                    }
                }
                button {
                    class: "button",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                "Only want to follow a delivery? "
                Link { to: Route::Track {}, "Track a consignment" }
            }
        }
    }
}
