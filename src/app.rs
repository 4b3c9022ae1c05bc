//! Application shell: context provision, session bootstrap, and routing.
//!
//! ARCHITECTURE
//! ============
//! The session context is constructed exactly once here and injected into
//! the tree via Leptos context rather than looked up through a global; it
//! lives for the process lifetime. The bootstrap runs once per load and
//! settles the session before any guard makes a navigation decision.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::nav_bar::NavBar;
use crate::pages::account::AccountPage;
use crate::pages::admin::AdminPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::onboarding::OnboardingPage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::state::admin::AdminState;
use crate::state::alerts::AlertsState;
use crate::state::session::SessionState;

/// HTML shell used by the SSR build.
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <leptos_meta::MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(RwSignal::new(AlertsState::default()));
    provide_context(RwSignal::new(AdminState::default()));

    // Once per load: revalidate any stored credential before guards settle.
    let booted = RwSignal::new(false);
    Effect::new(move || {
        if booted.get() {
            return;
        }
        booted.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::session::init(session).await;
        });
        #[cfg(not(feature = "hydrate"))]
        session.update(crate::state::session::settle_anonymous);
    });

    view! {
        <Stylesheet id="globegenius" href="/pkg/globegenius.css" />
        <Title text="GlobeGenius" />
        <Router>
            <NavBar />
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                    <Route path=path!("/reset-password") view=ResetPasswordPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/onboarding") view=OnboardingPage />
                    <Route path=path!("/account") view=AccountPage />
                    <Route path=path!("/admin") view=AdminPage />
                </Routes>
            </main>
        </Router>
    }
}
