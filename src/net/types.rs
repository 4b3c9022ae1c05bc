//! Wire DTOs for the GlobeGenius REST backend.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON; every struct here renames accordingly so
//! consumers never touch raw `serde_json::Value`. Fields the backend may omit
//! carry explicit `#[serde(default)]` instead of ad hoc option-chaining at use
//! sites. Unknown `subscriptionType` values are rejected at the boundary, which
//! downgrades a cached profile to "absent" rather than guessing a tier.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Subscription tier assigned by the backend.
///
/// The client never computes this; it only mirrors what the server said at
/// login/fetch time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionType {
    #[default]
    Free,
    Premium,
}

/// Per-user travel preferences captured by the onboarding wizard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    /// IATA codes of airports the user can depart from.
    #[serde(default)]
    pub home_airports: Vec<String>,
    /// IATA codes or region names the user wants deals for.
    #[serde(default)]
    pub favorite_destinations: Vec<String>,
    /// Whether the user accepts deals on any date.
    #[serde(default)]
    pub flexible_dates: bool,
}

/// The authenticated user as returned by `/api/auth/me` and login/registration
/// responses. Also the shape persisted in the profile cache entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique user identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub subscription_type: SubscriptionType,
    #[serde(default)]
    pub is_admin: bool,
    /// Whether the premium onboarding wizard has been completed.
    #[serde(default)]
    pub completed_onboarding: bool,
    #[serde(default)]
    pub travel_preferences: Option<TravelPreferences>,
}

impl Profile {
    /// True when the backend placed this user on the premium tier.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.subscription_type == SubscriptionType::Premium
    }
}

/// Login / premium-registration success body: `{ token, user }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Profile,
}

/// Basic (free) signup payload. The account requires email activation, so no
/// token comes back.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBasicRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Premium signup payload. The payment token is produced by the (out of
/// scope) payment widget and forwarded opaquely.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPremiumRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
}

/// Partial profile update; only present fields are sent.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_preferences: Option<TravelPreferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_onboarding: Option<bool>,
}

/// Profile-mutation response. The backend may omit `user` on endpoints that
/// only acknowledge; callers treat that as a no-op rather than nulling the
/// session.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub user: Option<Profile>,
}

/// Generic acknowledgement body: `{ message }`.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// A detected flight deal shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightAlert {
    pub id: String,
    /// Origin IATA code.
    pub origin: String,
    /// Destination IATA code.
    pub destination: String,
    /// Current deal price.
    pub price: f64,
    pub currency: String,
    /// Usual price before the drop, when the backend tracked one.
    #[serde(default)]
    pub previous_price: Option<f64>,
    /// ISO 8601 outbound date.
    pub departure_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    /// ISO 8601 timestamp the deal was detected.
    pub detected_at: String,
    #[serde(default)]
    pub deal_url: Option<String>,
    /// Reserved for premium subscribers.
    #[serde(default)]
    pub premium: bool,
}

impl FlightAlert {
    /// Whole-percent discount versus `previous_price`, when one is known and
    /// the deal is actually cheaper.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let previous = self.previous_price?;
        if previous <= 0.0 || self.price >= previous {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(((1.0 - self.price / previous) * 100.0).round() as u32)
    }

    /// Short `"LHR - JFK"` route label.
    #[must_use]
    pub fn route_label(&self) -> String {
        format!("{} - {}", self.origin, self.destination)
    }
}

/// A user row in the admin back-office.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub subscription_type: SubscriptionType,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A monitored origin/destination pair with its backend-assigned scan tier.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredRoute {
    pub id: String,
    pub origin: String,
    pub destination: String,
    /// Scan-priority tier; lower is scanned more often.
    pub tier: u8,
    #[serde(default)]
    pub active: bool,
}

/// One endpoint's share of external API usage.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointUsage {
    pub endpoint: String,
    pub count: i64,
}

/// Aggregate external-API usage for the admin stats panel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUsageStats {
    pub total_calls: i64,
    /// Monthly call allowance on the flight-data provider.
    pub quota: i64,
    #[serde(default)]
    pub endpoints: Vec<EndpointUsage>,
}

impl ApiUsageStats {
    /// Quota consumption as a whole percentage, clamped to 0..=100.
    #[must_use]
    pub fn usage_percent(&self) -> u32 {
        if self.quota <= 0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let pct = (self.total_calls as f64 / self.quota as f64 * 100.0).round() as i64;
        u32::try_from(pct.clamp(0, 100)).unwrap_or(0)
    }
}
