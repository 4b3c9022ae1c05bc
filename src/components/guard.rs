//! Route guards gating navigation subtrees on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both variants render a neutral waiting indicator while the session is
//! still settling and make no navigation decision until it has; deep-link
//! targets are not preserved across the redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{install_admin_redirect, install_unauth_redirect};

/// Allows the subtree through once a profile is present; otherwise redirects
/// to `/login` after the session settles.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show when=move || session.get().is_authenticated() fallback=move || guard_fallback(session)>
            {children()}
        </Show>
    }
}

/// Same settling behavior, but additionally requires the admin flag.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_admin_redirect(session, use_navigate());

    view! {
        <Show when=move || session.get().is_admin() fallback=move || guard_fallback(session)>
            {children()}
        </Show>
    }
}

fn guard_fallback(session: RwSignal<SessionState>) -> impl IntoView {
    view! {
        <div class="guard-wait">
            <p>{move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
        </div>
    }
}
