//! Back-office state: users, monitored routes, and API usage.
//!
//! DESIGN
//! ======
//! The three admin panels refresh together on a fixed poll, so they share one
//! state struct with a single loading/error pair instead of three copies of
//! the same bookkeeping.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{AdminUser, ApiUsageStats, MonitoredRoute};

/// Shared admin-dashboard state refreshed by the auto-poll.
#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub users: Vec<AdminUser>,
    pub routes: Vec<MonitoredRoute>,
    pub stats: Option<ApiUsageStats>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Routes ordered for the admin table: active before inactive, then by tier
/// (most frequently scanned first), then alphabetically by origin.
#[must_use]
pub fn ordered_routes(routes: &[MonitoredRoute]) -> Vec<MonitoredRoute> {
    let mut ordered = routes.to_vec();
    ordered.sort_by(|a, b| {
        b.active
            .cmp(&a.active)
            .then(a.tier.cmp(&b.tier))
            .then(a.origin.cmp(&b.origin))
    });
    ordered
}

/// Count of premium subscribers, shown in the users panel header.
#[must_use]
pub fn premium_user_count(users: &[AdminUser]) -> usize {
    users
        .iter()
        .filter(|u| u.subscription_type == crate::net::types::SubscriptionType::Premium)
        .count()
}
