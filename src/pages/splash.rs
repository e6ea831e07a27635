//! Landing screen shown briefly before routing to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SplashPage() -> impl IntoView {
    let navigate = use_navigate();
    // Dropping the handle cancels the redirect if the user routes away.
    let timer = gloo_timers::callback::Timeout::new(3_000, move || {
        navigate("/login", NavigateOptions::default());
    });
    let timer = StoredValue::new_local(timer);
    on_cleanup(move || timer.dispose());

    view! {
        <div class="splash">
            <h1 class="splash__brand">"Caseboard"</h1>
            <p class="splash__tagline">"Incident reporting for response teams"</p>
            <span class="feedback__spinner" aria-hidden="true"></span>
        </div>
    }
}
