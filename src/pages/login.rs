//! Email and password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form::{AuthCard, PasswordField, TextField};
use crate::net::api;
use crate::state::auth::{self, AuthState};
use crate::util::validation::{require, valid_email};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let checked_email = valid_email(&email.get());
        let checked_password = require(&password.get());
        email_error.set(checked_email.as_ref().err().copied());
        password_error.set(checked_password.as_ref().err().copied());
        let (Ok(email_value), Ok(password_value)) = (checked_email, checked_password) else {
            return;
        };
        busy.set(true);
        info.set(String::new());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(session) => {
                    auth::sign_in(auth, session);
                    navigate("/incidents", NavigateOptions::default());
                }
                Err(err) => {
                    info.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Welcome Back" subtitle="Sign in to continue">
            <form class="auth__form" on:submit=on_submit>
                <TextField
                    label="Email"
                    value=email
                    input_type="email"
                    placeholder="you@example.com"
                    error=email_error
                />
                <PasswordField label="Password" value=password error=password_error/>
                <a class="auth__link auth__link--right" href="/forgot">
                    "Forgot password?"
                </a>
                <button
                    class="btn btn--primary btn--block"
                    type="submit"
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth__message">{move || info.get()}</p>
            </Show>
            <p class="auth__footer">
                "Don't have an account? "
                <a class="auth__link" href="/signup">"Sign Up"</a>
            </p>
        </AuthCard>
    }
}
