//! Login page: email + password against the session context.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::session::{self, SessionState};

/// Trim and require both fields before hitting the backend.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                local_error.set(Some(message.to_owned()));
                return;
            }
        };
        local_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if session::login(session_signal, email_value, password_value).await {
                    navigate("/dashboard", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        "Sign in"
                    </button>
                </form>
                <ErrorBanner message=banner />
                <p class="auth-card__links">
                    <a href="/forgot-password">"Forgot password?"</a>
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
