//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::audits::AuditsPage;
use crate::pages::evidence::EvidencePage;
use crate::pages::forgot::ForgotPasswordPage;
use crate::pages::incidents::IncidentsPage;
use crate::pages::login::LoginPage;
use crate::pages::reports::ReportsPage;
use crate::pages::reset::ResetPasswordPage;
use crate::pages::signup::SignupPage;
use crate::pages::splash::SplashPage;
use crate::pages::verify::VerifyPage;
use crate::state::auth::{AuthState, restore_session};

/// Root application component.
///
/// Provides the session store as context and sets up client-side routing.
/// The splash route sits at `/` and forwards to `/login`; the four record
/// pages read the restored session from context and redirect nothing, so a
/// stale token simply surfaces as an API error with a retry path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { session: restore_session() });
    provide_context(auth);

    view! {
        <Title text="Caseboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SplashPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("verify") view=VerifyPage/>
                <Route path=StaticSegment("forgot") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset") view=ResetPasswordPage/>
                <Route path=StaticSegment("incidents") view=IncidentsPage/>
                <Route path=StaticSegment("evidence") view=EvidencePage/>
                <Route path=StaticSegment("audits") view=AuditsPage/>
                <Route path=StaticSegment("reports") view=ReportsPage/>
            </Routes>
        </Router>
    }
}
