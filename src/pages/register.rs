//! Signup page covering both the free and the premium plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! Free signup only queues an activation email; premium signup establishes a
//! session immediately and hands off to the onboarding wizard.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::{RegisterBasicRequest, RegisterPremiumRequest};
use crate::state::session::{self, SessionState};

const MIN_PASSWORD_LEN: usize = 8;

/// Validated signup fields, plan-independent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn validate_registration_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegistrationInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in all fields.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegistrationInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let premium = RwSignal::new(false);
    let local_error = RwSignal::new(None::<String>);
    let confirmation = RwSignal::new(None::<String>);

    let busy = move || session_signal.get().loading;
    let banner = Signal::derive(move || {
        local_error.get().or_else(|| session_signal.get().error)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let input = match validate_registration_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                local_error.set(Some(message.to_owned()));
                return;
            }
        };
        local_error.set(None);
        confirmation.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let wants_premium = premium.get();
            leptos::task::spawn_local(async move {
                if wants_premium {
                    let request = RegisterPremiumRequest {
                        email: input.email,
                        name: input.name,
                        password: input.password,
                        payment_token: None,
                    };
                    if session::register_premium(session_signal, request).await {
                        navigate("/onboarding", NavigateOptions::default());
                    }
                } else {
                    let request = RegisterBasicRequest {
                        email: input.email,
                        name: input.name,
                        password: input.password,
                    };
                    if let Some(message) = session::register_basic(session_signal, request).await {
                        confirmation.set(Some(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, input);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <div class="plan-toggle">
                    <button
                        class="btn plan-toggle__option"
                        class=("plan-toggle__option--selected", move || !premium.get())
                        on:click=move |_| premium.set(false)
                    >
                        "Free"
                    </button>
                    <button
                        class="btn plan-toggle__option"
                        class=("plan-toggle__option--selected", move || premium.get())
                        on:click=move |_| premium.set(true)
                    >
                        "Premium"
                    </button>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (min 8 characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if premium.get() { "Start premium" } else { "Sign up free" }}
                    </button>
                </form>
                <ErrorBanner message=banner />
                <Show when=move || confirmation.get().is_some()>
                    <p class="auth-card__confirmation">{move || confirmation.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__links">
                    <a href="/login">"Already have an account?"</a>
                </p>
            </div>
        </div>
    }
}
