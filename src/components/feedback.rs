//! Loading, error, and empty placeholders plus the status badge.
//!
//! DESIGN
//! ======
//! All four list pages sequence the same branches: loading, then error with
//! retry, then an empty notice, then the table. Keeping the placeholder
//! markup here means the pages only decide which branch they are in.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;

/// Centered spinner shown while a collection loads.
#[component]
pub fn LoadingState(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Loading...");
    view! {
        <div class="feedback feedback--loading">
            <span class="feedback__spinner" aria-hidden="true"></span>
            <p class="feedback__label">{label}</p>
        </div>
    }
}

/// Failure panel with the message and an optional retry button.
#[component]
pub fn ErrorState(
    message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="feedback feedback--error">
            <p class="feedback__message">{message}</p>
            {on_retry.map(|retry| {
                view! {
                    <button class="btn" on:click=move |_| retry.run(())>
                        "Try Again"
                    </button>
                }
            })}
        </div>
    }
}

/// Placeholder for a collection with nothing to show.
#[component]
pub fn EmptyState(message: String) -> impl IntoView {
    view! {
        <div class="feedback feedback--empty">
            <p class="feedback__label">{message}</p>
        </div>
    }
}

/// Badge tone class for a record status.
pub fn status_tone(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "completed" | "resolved" | "closed" | "verified" | "active" => "good",
        "pending" | "open" | "in-progress" | "investigating" => "warn",
        _ => "muted",
    }
}

/// Colored pill for a record's status field.
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    let tone = status_tone(&status);
    let label = if status.trim().is_empty() { "—".to_owned() } else { status };
    view! { <span class=format!("badge badge--{tone}")>{label}</span> }
}
