//! Password-reset completion page, reached from the emailed link.
//!
//! The reset token arrives as a `?token=` query parameter and is forwarded
//! opaquely; the backend decides whether it is still valid.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::error_banner::ErrorBanner;
use crate::state::session::{self, SessionState};

const MIN_PASSWORD_LEN: usize = 8;

fn validate_reset_input(
    token: Option<&str>,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return Err("This reset link is missing its token. Request a new one.");
    };
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((token.to_owned(), password.to_owned()))
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let confirmation = RwSignal::new(None::<String>);
    let local_error = RwSignal::new(None::<String>);

    let busy = move || session_signal.get().loading;
    let banner = Signal::derive(move || {
        local_error.get().or_else(|| session_signal.get().error)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let token = query.with_untracked(|q| q.get("token"));
        let (token_value, password_value) =
            match validate_reset_input(token.as_deref(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    local_error.set(Some(message.to_owned()));
                    return;
                }
            };
        local_error.set(None);
        confirmation.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(message) =
                session::reset_password(session_signal, token_value, password_value).await
            {
                confirmation.set(Some(message));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password (min 8 characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        "Set new password"
                    </button>
                </form>
                <ErrorBanner message=banner />
                <Show when=move || confirmation.get().is_some()>
                    <p class="auth-card__confirmation">
                        {move || confirmation.get().unwrap_or_default()}
                        " "
                        <a href="/login">"Sign in"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
