//! Modal displaying the signed-in user's profile and session token.
//!
//! DESIGN
//! ======
//! The modal has a read view and an edit view. Reads come straight from the
//! auth context; saving sends the editable subset upstream and merges the
//! returned account back into the stored session, so the top bar and any
//! reopened modal see the new values immediately.

use leptos::prelude::*;

use crate::components::form::TextField;
use crate::net::api;
use crate::net::types::ProfileUpdate;
use crate::state::auth::{self, AuthState};
use crate::util::format::full_name;
use crate::util::validation::parse_list;

/// Profile modal with account details, a copyable session token, and an
/// edit form for the portfolio fields.
#[component]
pub fn ProfileModal(on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let copied = RwSignal::new(false);
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Edit fields start from whatever the session holds right now; the
    // modal remounts on every open so they never go stale.
    let current = auth.get_untracked().session.map(|s| s.user).unwrap_or_default();
    let image = RwSignal::new(current.image.unwrap_or_default());
    let title_field = RwSignal::new(current.developer_title.unwrap_or_default());
    let years = RwSignal::new(
        current.years_of_experience.map(|y| y.to_string()).unwrap_or_default(),
    );
    let stack = RwSignal::new(current.developer_stack.join(", "));
    let certifications = RwSignal::new(current.certifications.join(", "));
    let portfolio = RwSignal::new(current.portfolio_link.unwrap_or_default());
    let cv = RwSignal::new(current.cv_link.unwrap_or_default());

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let on_copy = move |_| {
        if let Some(token) = auth.get_untracked().token().map(str::to_owned) {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&token);
                copied.set(true);
            }
        }
    };

    let on_save = move |_| {
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            error.set(Some(auth::NOT_AUTHENTICATED.to_owned()));
            return;
        };
        let update = ProfileUpdate {
            image: image.get_untracked().trim().to_owned(),
            developer_title: title_field.get_untracked().trim().to_owned(),
            years_of_experience: years.get_untracked().trim().parse().unwrap_or(0),
            developer_stack: parse_list(&stack.get_untracked()),
            certifications: parse_list(&certifications.get_untracked()),
            portfolio_link: portfolio.get_untracked().trim().to_owned(),
            cv_link: cv.get_untracked().trim().to_owned(),
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::set_profile(&token, &update).await {
                Ok(user) => {
                    auth::merge_profile(auth, user);
                    editing.set(false);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let profile_name = move || {
        auth.get().session.as_ref().map_or_else(
            || "—".to_owned(),
            |s| full_name(&s.user.firstname, &s.user.lastname),
        )
    };
    let profile_email = move || {
        auth.get()
            .session
            .as_ref()
            .map_or_else(|| "—".to_owned(), |s| s.user.email.clone())
    };
    let profile_role = move || {
        auth.get().session.as_ref().map_or_else(
            || "—".to_owned(),
            |s| s.user.user_type.clone().unwrap_or_else(|| "—".to_owned()),
        )
    };
    let profile_title = move || {
        auth.get().session.as_ref().map_or_else(
            || "—".to_owned(),
            |s| s.user.developer_title.clone().unwrap_or_else(|| "—".to_owned()),
        )
    };
    let profile_years = move || {
        auth.get().session.as_ref().map_or_else(
            || "—".to_owned(),
            |s| {
                s.user
                    .years_of_experience
                    .map_or_else(|| "—".to_owned(), |y| format!("{y} yrs"))
            },
        )
    };
    let profile_stack = move || {
        auth.get().session.as_ref().map_or_else(
            || "—".to_owned(),
            |s| {
                if s.user.developer_stack.is_empty() {
                    "—".to_owned()
                } else {
                    s.user.developer_stack.join(", ")
                }
            },
        )
    };
    let profile_certifications = move || {
        auth.get().session.as_ref().map_or_else(
            || "—".to_owned(),
            |s| {
                if s.user.certifications.is_empty() {
                    "—".to_owned()
                } else {
                    s.user.certifications.join(", ")
                }
            },
        )
    };
    let session_token = move || {
        auth.get()
            .session
            .as_ref()
            .map_or_else(|| "—".to_owned(), |s| s.token.clone())
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--profile"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"My Profile"</h2>

                {move || {
                    if editing.get() {
                        view! {
                            <TextField label="Image URL" value=image/>
                            <TextField label="Title" value=title_field/>
                            <TextField label="Years of Experience" value=years input_type="number"/>
                            <TextField
                                label="Stack"
                                value=stack
                                placeholder="Comma-separated, e.g. rust, wasm"
                            />
                            <TextField
                                label="Certifications"
                                value=certifications
                                placeholder="Comma-separated"
                            />
                            <TextField label="Portfolio Link" value=portfolio/>
                            <TextField label="CV Link" value=cv/>
                            {move || {
                                error.get().map(|msg| view! { <p class="dialog__error">{msg}</p> })
                            }}
                            <div class="dialog__actions">
                                <button
                                    class="btn"
                                    disabled=move || busy.get()
                                    on:click=move |_| editing.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy.get()
                                    on:click=on_save
                                >
                                    {move || if busy.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="dialog__profile-row">
                                <span class="dialog__profile-label">"Name"</span>
                                <span class="dialog__profile-value">{profile_name}</span>
                            </div>
                            <div class="dialog__profile-row">
                                <span class="dialog__profile-label">"Email"</span>
                                <span class="dialog__profile-value">{profile_email}</span>
                            </div>
                            <div class="dialog__profile-row">
                                <span class="dialog__profile-label">"Role"</span>
                                <span class="dialog__profile-value">{profile_role}</span>
                            </div>
                            <div class="dialog__profile-row">
                                <span class="dialog__profile-label">"Title"</span>
                                <span class="dialog__profile-value">{profile_title}</span>
                            </div>
                            <div class="dialog__profile-row">
                                <span class="dialog__profile-label">"Experience"</span>
                                <span class="dialog__profile-value">{profile_years}</span>
                            </div>
                            <div class="dialog__profile-row">
                                <span class="dialog__profile-label">"Stack"</span>
                                <span class="dialog__profile-value">{profile_stack}</span>
                            </div>
                            <div class="dialog__profile-row">
                                <span class="dialog__profile-label">"Certifications"</span>
                                <span class="dialog__profile-value">{profile_certifications}</span>
                            </div>

                            <div class="dialog__profile-row">
                                <span class="dialog__profile-label">"Session Token"</span>
                            </div>
                            <div class="dialog__profile-token-box">
                                <code class="dialog__profile-token-text">{session_token}</code>
                                <button
                                    class="btn dialog__profile-token-copy"
                                    on:click=on_copy
                                    title="Copy token"
                                >
                                    {move || if copied.get() { "Copied" } else { "Copy" }}
                                </button>
                            </div>

                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| editing.set(true)>
                                    "Edit Profile"
                                </button>
                                <button class="btn btn--primary" on:click=on_close_click>
                                    "Close"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
