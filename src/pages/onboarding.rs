//! Premium first-run wizard capturing travel preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached once after premium registration (and re-reachable from the
//! account page). Completing it writes the preferences and the
//! `completedOnboarding` flag through the normal profile-update operation,
//! which also clears the session's onboarding diversion.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::guard::RequireAuth;
use crate::net::types::{ProfileUpdate, TravelPreferences};
use crate::state::session::{self, SessionState};

/// Parse a free-text list of IATA codes: split on commas/whitespace,
/// uppercase, keep only three-letter alphabetic codes, drop duplicates in
/// order.
fn parse_airport_codes(raw: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for piece in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        let code = piece.trim().to_ascii_uppercase();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) && !seen.contains(&code) {
            seen.push(code);
        }
    }
    seen
}

/// The wizard's forward button is gated on the current step's input.
fn step_can_continue(step: usize, home_airports: &[String], destinations: &[String]) -> bool {
    match step {
        0 => !home_airports.is_empty(),
        1 => !destinations.is_empty(),
        _ => true,
    }
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <OnboardingWizard />
        </RequireAuth>
    }
}

#[component]
fn OnboardingWizard() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let step = RwSignal::new(0_usize);
    let airports_raw = RwSignal::new(String::new());
    let destinations_raw = RwSignal::new(String::new());
    let flexible = RwSignal::new(true);

    let busy = move || session_signal.get().loading;
    let banner = Signal::derive(move || session_signal.get().error);

    let airports = move || parse_airport_codes(&airports_raw.get());
    let destinations = move || parse_airport_codes(&destinations_raw.get());
    let can_continue = move || step_can_continue(step.get(), &airports(), &destinations());

    let on_finish = Callback::new(move |()| {
        if busy() || !can_continue() {
            return;
        }
        let update = ProfileUpdate {
            travel_preferences: Some(TravelPreferences {
                home_airports: airports(),
                favorite_destinations: destinations(),
                flexible_dates: flexible.get(),
            }),
            completed_onboarding: Some(true),
            ..ProfileUpdate::default()
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if session::update_profile(session_signal, update).await {
                    navigate("/dashboard", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, update);
        }
    });

    view! {
        <div class="onboarding-page">
            <div class="onboarding-card">
                <h1>"Welcome to Premium"</h1>
                <p class="onboarding-card__step">{move || format!("Step {} of 2", step.get() + 1)}</p>

                <Show when=move || step.get() == 0>
                    <label class="onboarding-card__label">
                        "Which airports can you fly from?"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="e.g. LHR, LGW, STN"
                            prop:value=move || airports_raw.get()
                            on:input=move |ev| airports_raw.set(event_target_value(&ev))
                        />
                    </label>
                    <p class="onboarding-card__hint">
                        {move || format!("{} airport(s) recognized", airports().len())}
                    </p>
                </Show>

                <Show when=move || step.get() == 1>
                    <label class="onboarding-card__label">
                        "Where do you dream of going?"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="e.g. JFK, NRT, SYD"
                            prop:value=move || destinations_raw.get()
                            on:input=move |ev| destinations_raw.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="onboarding-card__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || flexible.get()
                            on:change=move |ev| flexible.set(event_target_checked(&ev))
                        />
                        "My dates are flexible"
                    </label>
                </Show>

                <ErrorBanner message=banner />

                <div class="onboarding-card__actions">
                    <Show when=move || { step.get() > 0 }>
                        <button class="btn" on:click=move |_| step.update(|s| *s -= 1)>
                            "Back"
                        </button>
                    </Show>
                    <Show
                        when=move || step.get() == 0
                        fallback=move || {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy() || !can_continue()
                                    on:click=move |_| on_finish.run(())
                                >
                                    "Finish"
                                </button>
                            }
                        }
                    >
                        <button
                            class="btn btn--primary"
                            disabled=move || !can_continue()
                            on:click=move |_| step.set(1)
                        >
                            "Continue"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
