//! One-time-code confirmation after signup.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form::AuthCard;
use crate::net::api;
use crate::util::validation::{normalize_otp_input, valid_otp};

#[component]
pub fn VerifyPage() -> impl IntoView {
    let code = RwSignal::new(String::new());
    let code_error = RwSignal::new(None::<&'static str>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let checked = valid_otp(&code.get());
        code_error.set(checked.as_ref().err().copied());
        let Ok(code_value) = checked else {
            return;
        };
        busy.set(true);
        info.set(String::new());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::verify_otp(&code_value).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(err) => {
                    info.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Verify OTP" subtitle="Enter the 6-digit code we emailed you">
            <form class="auth__form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"OTP"</span>
                    <input
                        class="field__input field__input--otp"
                        class:field__input--invalid=move || code_error.get().is_some()
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(normalize_otp_input(&event_target_value(&ev)))
                    />
                    {move || {
                        code_error.get().map(|msg| view! { <span class="field__error">{msg}</span> })
                    }}
                </label>
                <button
                    class="btn btn--primary btn--block"
                    type="submit"
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Verifying..." } else { "Verify" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth__message">{move || info.get()}</p>
            </Show>
        </AuthCard>
    }
}
