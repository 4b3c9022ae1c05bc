//! Admin back-office: users, monitored routes, and API usage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only route. All three panels refresh together: once on entry and
//! then on a fixed 30-second poll that stops when the page unmounts.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::guard::RequireAdmin;
use crate::net::types::SubscriptionType;
use crate::state::admin::{AdminState, ordered_routes, premium_user_count};

/// Tiers the backend accepts for a monitored route.
pub const TIER_CHOICES: [u8; 3] = [1, 2, 3];

/// Scan-frequency label for a tier value.
fn tier_label(tier: u8) -> &'static str {
    match tier {
        1 => "Tier 1 (hourly)",
        2 => "Tier 2 (daily)",
        3 => "Tier 3 (weekly)",
        _ => "Unknown tier",
    }
}

fn subscription_label(tier: SubscriptionType) -> &'static str {
    match tier {
        SubscriptionType::Free => "free",
        SubscriptionType::Premium => "premium",
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminContent />
        </RequireAdmin>
    }
}

#[cfg(feature = "hydrate")]
async fn refresh(admin: RwSignal<AdminState>) {
    let users = crate::net::api::fetch_admin_users().await;
    let routes = crate::net::api::fetch_admin_routes().await;
    let stats = crate::net::api::fetch_usage_stats().await;
    admin.update(|state| {
        state.loading = false;
        match (users, routes, stats) {
            (Ok(users), Ok(routes), Ok(stats)) => {
                state.users = users;
                state.routes = routes;
                state.stats = Some(stats);
                state.error = None;
            }
            (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
                state.error = Some(err.to_string());
            }
        }
    });
}

#[component]
fn AdminContent() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();

    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);
        admin.update(|s| {
            s.loading = true;
            s.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            refresh(admin).await;
        });
        #[cfg(not(feature = "hydrate"))]
        admin.update(|s| s.loading = false);
    });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh(admin).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_set_tier = move |route_id: String, tier: u8| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_route_tier(&route_id, tier).await {
                Ok(updated) => admin.update(|state| {
                    if let Some(route) = state.routes.iter_mut().find(|r| r.id == updated.id) {
                        *route = updated;
                    }
                }),
                Err(err) => admin.update(|state| state.error = Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (route_id, tier);
        }
    };

    let on_delete_user = move |user_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_admin_user(&user_id).await {
                Ok(()) => admin.update(|state| state.users.retain(|u| u.id != user_id)),
                Err(err) => admin.update(|state| state.error = Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    };

    let routes_sorted = move || ordered_routes(&admin.get().routes);

    view! {
        <div class="admin-page">
            <h1>"Back office"</h1>

            <Show when=move || admin.get().error.is_some()>
                <p class="admin-page__error">{move || admin.get().error.unwrap_or_default()}</p>
            </Show>

            <Show when=move || !admin.get().loading fallback=|| view! { <p>"Loading..."</p> }>
                <section class="admin-section">
                    <h2>
                        {move || {
                            let users = admin.get().users;
                            format!("Users ({} total, {} premium)", users.len(), premium_user_count(&users))
                        }}
                    </h2>
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Plan"</th>
                                <th>"Admin"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                admin
                                    .get()
                                    .users
                                    .into_iter()
                                    .map(|user| {
                                        let id = user.id.clone();
                                        view! {
                                            <tr>
                                                <td>{user.name.clone()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td>{subscription_label(user.subscription_type)}</td>
                                                <td>{if user.is_admin { "yes" } else { "" }}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_delete_user(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>

                <section class="admin-section">
                    <h2>"Monitored routes"</h2>
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Route"</th>
                                <th>"Tier"</th>
                                <th>"Active"</th>
                                <th>"Change tier"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                routes_sorted()
                                    .into_iter()
                                    .map(|route| {
                                        let id = route.id.clone();
                                        view! {
                                            <tr>
                                                <td>{format!("{} - {}", route.origin, route.destination)}</td>
                                                <td>{tier_label(route.tier)}</td>
                                                <td>{if route.active { "yes" } else { "paused" }}</td>
                                                <td>
                                                    {TIER_CHOICES
                                                        .into_iter()
                                                        .map(|tier| {
                                                            let id = id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn admin-table__tier"
                                                                    disabled=route.tier == tier
                                                                    on:click=move |_| on_set_tier(id.clone(), tier)
                                                                >
                                                                    {tier.to_string()}
                                                                </button>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>

                <section class="admin-section">
                    <h2>"API usage"</h2>
                    <Show
                        when=move || admin.get().stats.is_some()
                        fallback=|| view! { <p>"No usage data."</p> }
                    >
                        {move || {
                            admin
                                .get()
                                .stats
                                .map(|stats| {
                                    view! {
                                        <div class="admin-usage">
                                            <p>
                                                {format!(
                                                    "{} of {} calls used ({}%)",
                                                    stats.total_calls,
                                                    stats.quota,
                                                    stats.usage_percent(),
                                                )}
                                            </p>
                                            <ul class="admin-usage__endpoints">
                                                {stats
                                                    .endpoints
                                                    .iter()
                                                    .map(|endpoint| {
                                                        view! {
                                                            <li>
                                                                {format!("{}: {}", endpoint.endpoint, endpoint.count)}
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                </section>
            </Show>
        </div>
    }
}
