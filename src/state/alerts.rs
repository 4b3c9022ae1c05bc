//! Flight-alert list state for the dashboard.
//!
//! DESIGN
//! ======
//! Keeping the alert inventory separate from session state means a failed
//! alerts fetch shows a banner on the dashboard without disturbing the
//! logged-in session.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use crate::net::types::FlightAlert;

/// Shared alert-list state backed by `GET /api/alerts`.
#[derive(Clone, Debug, Default)]
pub struct AlertsState {
    pub items: Vec<FlightAlert>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Alerts the current user may open: premium subscribers see everything,
/// free users only the non-premium deals. Newest detection first.
#[must_use]
pub fn visible_alerts(items: &[FlightAlert], is_premium: bool) -> Vec<FlightAlert> {
    let mut visible: Vec<FlightAlert> = items
        .iter()
        .filter(|alert| is_premium || !alert.premium)
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.detected_at.cmp(&a.detected_at));
    visible
}

/// How many deals the free tier is missing out on; drives the upgrade banner.
#[must_use]
pub fn locked_alert_count(items: &[FlightAlert], is_premium: bool) -> usize {
    if is_premium {
        return 0;
    }
    items.iter().filter(|alert| alert.premium).count()
}
