//! Password-reset code request.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form::{AuthCard, TextField};
use crate::net::api;
use crate::util::validation::valid_email;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let checked = valid_email(&email.get());
        email_error.set(checked.as_ref().err().copied());
        let Ok(email_value) = checked else {
            return;
        };
        busy.set(true);
        info.set(String::new());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::forgot_password(&email_value).await {
                Ok(()) => navigate("/reset", NavigateOptions::default()),
                Err(err) => {
                    info.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Forgot Password" subtitle="We will email you a reset code">
            <form class="auth__form" on:submit=on_submit>
                <TextField
                    label="Email"
                    value=email
                    input_type="email"
                    placeholder="you@example.com"
                    error=email_error
                />
                <button
                    class="btn btn--primary btn--block"
                    type="submit"
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Sending..." } else { "Send" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth__message">{move || info.get()}</p>
            </Show>
            <p class="auth__footer">
                "Remembered it? "
                <a class="auth__link" href="/login">"Log In"</a>
            </p>
        </AuthCard>
    }
}
