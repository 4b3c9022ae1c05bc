//! Dashboard page listing the user's flight-price alerts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. A freshly premium-registered
//! session is diverted to the onboarding wizard before anything renders;
//! everyone else gets the alert inventory with premium gating applied.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert_card::AlertCard;
use crate::components::guard::RequireAuth;
use crate::state::alerts::{AlertsState, locked_alert_count, visible_alerts};
use crate::state::session::SessionState;

/// Upgrade-banner copy for free users, or `None` when nothing is hidden.
fn upgrade_banner_text(locked: usize) -> Option<String> {
    match locked {
        0 => None,
        1 => Some("1 premium deal is hidden. Upgrade to see it.".to_owned()),
        n => Some(format!("{n} premium deals are hidden. Upgrade to see them.")),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardContent />
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let alerts = expect_context::<RwSignal<AlertsState>>();
    let navigate = use_navigate();

    // A premium signup lands here once before its wizard has run.
    Effect::new(move || {
        if session_signal.get().onboarding_pending {
            navigate("/onboarding", NavigateOptions::default());
        }
    });

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);
        alerts.update(|s| {
            s.loading = true;
            s.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_alerts().await {
                Ok(items) => alerts.update(|s| {
                    s.items = items;
                    s.loading = false;
                }),
                Err(err) => alerts.update(|s| {
                    s.error = Some(err.to_string());
                    s.loading = false;
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        alerts.update(|s| s.loading = false);
    });

    let is_premium = move || session_signal.get().is_premium();
    let deals = move || visible_alerts(&alerts.get().items, is_premium());
    let banner = move || upgrade_banner_text(locked_alert_count(&alerts.get().items, is_premium()));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Your deals"</h1>
                <span class="dashboard-page__tier">
                    {move || if is_premium() { "Premium" } else { "Free plan" }}
                </span>
            </header>

            <Show when=move || banner().is_some()>
                <div class="dashboard-page__upgrade">
                    <span>{move || banner().unwrap_or_default()}</span>
                    <a class="btn btn--primary" href="/account">
                        "Upgrade"
                    </a>
                </div>
            </Show>

            <Show when=move || alerts.get().error.is_some()>
                <p class="dashboard-page__error">{move || alerts.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !alerts.get().loading
                fallback=|| view! { <p>"Loading deals..."</p> }
            >
                <Show
                    when=move || !deals().is_empty()
                    fallback=|| {
                        view! {
                            <p class="dashboard-page__empty">
                                "No deals yet. We are watching your routes; check back soon."
                            </p>
                        }
                    }
                >
                    <div class="dashboard-page__cards">
                        {move || {
                            deals()
                                .into_iter()
                                .map(|alert| view! { <AlertCard alert=alert /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
