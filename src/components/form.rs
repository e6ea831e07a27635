//! Shared form controls for the auth pages and record dialogs.
//!
//! DESIGN
//! ======
//! Every field is a controlled input bound to an `RwSignal<String>` owned by
//! the page. Validation messages travel the other way through an optional
//! per-field error signal so a submit handler can set them all at once.

use leptos::prelude::*;

/// Centered card wrapping each auth screen.
#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth">
            <div class="auth__card">
                <h1 class="auth__title">{title}</h1>
                <p class="auth__subtitle">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}

/// Labeled single-line text input.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] error: Option<RwSignal<Option<&'static str>>>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| RwSignal::new(None));
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <span class="field__error">{msg}</span> })}
        </label>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] error: Option<RwSignal<Option<&'static str>>>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| RwSignal::new(None));
    let visible = RwSignal::new(false);
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <div class="field__password">
                <input
                    class="field__input"
                    class:field__input--invalid=move || error.get().is_some()
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="field__toggle"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            {move || error.get().map(|msg| view! { <span class="field__error">{msg}</span> })}
        </label>
    }
}

/// Labeled dropdown with a disabled placeholder entry.
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional)] error: Option<RwSignal<Option<&'static str>>>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| RwSignal::new(None));
    let placeholder = format!("Select {}", label.to_lowercase());
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" disabled>{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(val, text)| view! { <option value=val>{text}</option> })
                    .collect_view()}
            </select>
            {move || error.get().map(|msg| view! { <span class="field__error">{msg}</span> })}
        </label>
    }
}

/// Labeled multi-line text input.
#[component]
pub fn TextArea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--area"
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}
