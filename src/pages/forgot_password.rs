//! Password-reset request page.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::state::session::{self, SessionState};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
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
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            local_error.set(Some("Enter your email first.".to_owned()));
            return;
        }
        local_error.set(None);
        confirmation.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(message) = session::request_password_reset(session_signal, email_value).await {
                confirmation.set(Some(message));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <p class="auth-card__subtitle">
                    "We will email you a link to choose a new password."
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        "Send reset link"
                    </button>
                </form>
                <ErrorBanner message=banner />
                <Show when=move || confirmation.get().is_some()>
                    <p class="auth-card__confirmation">{move || confirmation.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__links">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
