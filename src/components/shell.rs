//! Authenticated page chrome: sidebar navigation plus the top bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every record page renders inside this shell. The sidebar links between
//! the four collections, the top bar names the current page and opens the
//! profile modal, and logging out clears the stored session before routing
//! back to the login screen.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::profile_modal::ProfileModal;
use crate::net::api;
use crate::state::auth::{self, AuthState};
use crate::util::format::full_name;

const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("Incidents", "/incidents", "△"),
    ("Evidence", "/evidence", "▣"),
    ("Audits", "/audits", "☰"),
    ("Reports", "/reports", "✎"),
];

#[component]
pub fn Shell(title: &'static str, children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let show_profile = RwSignal::new(false);

    // Refresh the cached profile once per page visit so edits made in
    // another tab show up without a re-login.
    if let Some(token) = auth.get_untracked().token().map(str::to_owned) {
        leptos::task::spawn_local(async move {
            match api::get_profile(&token).await {
                Ok(user) => auth::merge_profile(auth, user),
                Err(err) => log::warn!("profile refresh failed: {err}"),
            }
        });
    }

    let location = use_location();
    let pathname = location.pathname;

    let navigate = use_navigate();
    let on_logout = move |_| {
        auth::sign_out(auth);
        navigate("/login", NavigateOptions::default());
    };

    let display_name = move || match &auth.get().session {
        Some(session) => full_name(&session.user.firstname, &session.user.lastname),
        None => "Unknown".to_owned(),
    };
    let avatar = move || match &auth.get().session {
        Some(session) => initials(&session.user.firstname, &session.user.lastname),
        None => "?".to_owned(),
    };

    view! {
        <div class="shell">
            <aside class="sidebar">
                <div class="sidebar__brand">"Caseboard"</div>
                <nav class="sidebar__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(label, path, glyph)| {
                            view! {
                                <a
                                    class="sidebar__link"
                                    class:sidebar__link--active=move || pathname.get() == path
                                    href=path
                                >
                                    <span class="sidebar__glyph" aria-hidden="true">{glyph}</span>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button class="sidebar__logout" on:click=on_logout>
                    "Log Out"
                </button>
            </aside>
            <div class="shell__main">
                <header class="topbar">
                    <h1 class="topbar__title">{title}</h1>
                    <button class="topbar__profile" on:click=move |_| show_profile.set(true)>
                        <span class="topbar__avatar">{avatar}</span>
                        <span class="topbar__name">{display_name}</span>
                    </button>
                </header>
                <main class="shell__content">{children()}</main>
            </div>
            <Show when=move || show_profile.get()>
                <ProfileModal on_close=Callback::new(move |()| show_profile.set(false))/>
            </Show>
        </div>
    }
}

/// Up to two uppercase letters for the avatar circle.
fn initials(firstname: &str, lastname: &str) -> String {
    let letters: String = firstname
        .trim()
        .chars()
        .next()
        .into_iter()
        .chain(lastname.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() { "?".to_owned() } else { letters }
}
