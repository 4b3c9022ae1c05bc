//! Top navigation bar, session-aware.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Site-wide nav: public links for anonymous visitors, dashboard/account
/// links once logged in, and the admin link only for admins.
#[component]
pub fn NavBar() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session_signal);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "GlobeGenius"
            </a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || session_signal.get().is_authenticated()
                fallback=|| {
                    view! {
                        <a class="nav-bar__link" href="/login">
                            "Sign in"
                        </a>
                        <a class="nav-bar__link nav-bar__link--cta" href="/register">
                            "Get started"
                        </a>
                    }
                }
            >
                <a class="nav-bar__link" href="/dashboard">
                    "Dashboard"
                </a>
                <a class="nav-bar__link" href="/account">
                    "Account"
                </a>
                <Show when=move || session_signal.get().is_admin()>
                    <a class="nav-bar__link" href="/admin">
                        "Admin"
                    </a>
                </Show>
                <span class="nav-bar__user">
                    {move || session_signal.get().profile.map(|p| p.name).unwrap_or_default()}
                </span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
