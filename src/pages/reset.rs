//! New-password entry using the emailed reset code.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form::{AuthCard, PasswordField};
use crate::net::api;
use crate::util::validation::{normalize_otp_input, passwords_match, valid_otp, valid_password};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let code = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let code_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let confirm_error = RwSignal::new(None::<&'static str>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let checked_code = valid_otp(&code.get());
        let checked_password = valid_password(&password.get());
        let confirmed = passwords_match(&password.get(), &confirm.get());
        code_error.set(checked_code.as_ref().err().copied());
        password_error.set(checked_password.as_ref().err().copied());
        confirm_error.set(confirmed.err());
        let (Ok(code_value), Ok(password_value), Ok(())) =
            (checked_code, checked_password, confirmed)
        else {
            return;
        };
        busy.set(true);
        info.set(String::new());
        let confirm_value = confirm.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::reset_password(&code_value, &password_value, &confirm_value).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(err) => {
                    info.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Reset Password" subtitle="Enter the reset code and a new password">
            <form class="auth__form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Reset Code"</span>
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
                <PasswordField label="Password" value=password error=password_error/>
                <PasswordField label="Re-Enter Password" value=confirm error=confirm_error/>
                <button
                    class="btn btn--primary btn--block"
                    type="submit"
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Resetting..." } else { "Reset" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth__message">{move || info.get()}</p>
            </Show>
        </AuthCard>
    }
}
