//! REST API layer for the GlobeGenius backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! credential attached in the `x-auth-token` header when present.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call funnels through one response path: transport failures map to
//! [`ApiError::Network`], 4xx bodies surface their `message` verbatim, and a
//! 401 on any non-auth endpoint triggers the emergency logout (clear the
//! token store, hard navigate to `/login`) regardless of which operation was
//! in flight.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AdminUser, ApiUsageStats, AuthResponse, FlightAlert, MessageResponse, MonitoredRoute,
    Profile, ProfileResponse, ProfileUpdate, RegisterBasicRequest, RegisterPremiumRequest,
};

#[cfg(feature = "hydrate")]
use crate::util::auth_storage;

/// Header carrying the bearer credential on every authenticated request.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Failure modes surfaced to session operations and pages.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Could not reach the server. Please try again.")]
    Network,
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("The server returned an unexpected response.")]
    Decode,
    #[error("{0}")]
    Message(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_user_endpoint(user_id: &str) -> String {
    format!("/api/admin/users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_route_tier_endpoint(route_id: &str) -> String {
    format!("/api/admin/routes/{route_id}/tier")
}

/// Endpoints whose 401 means "bad credentials for this call", not "the
/// session died": login, registration, and the password-reset pair.
#[cfg(any(test, feature = "hydrate"))]
fn is_auth_exempt(path: &str) -> bool {
    path.starts_with("/api/auth/") && path != "/api/auth/me"
}

/// Pull the backend's `{"message": ...}` out of an error body, if present.
#[cfg(any(test, feature = "hydrate"))]
fn extract_error_message(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    parsed
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(ToOwned::to_owned)
}

/// Map a non-OK status and body to the error the caller sees.
#[cfg(any(test, feature = "hydrate"))]
fn error_for_status(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    match extract_error_message(body) {
        Some(message) => ApiError::Message(message),
        None => ApiError::Message(format!("The request failed (status {status}).")),
    }
}

/// The emergency logout only navigates when the user is not already looking
/// at the login page.
#[cfg(any(test, feature = "hydrate"))]
fn should_force_login(current_path: &str) -> bool {
    current_path != "/login"
}

#[cfg(feature = "hydrate")]
fn emergency_logout() {
    log::warn!("received 401 outside the auth flow; clearing session");
    auth_storage::clear();
    if let Some(window) = web_sys::window() {
        let path = window.location().pathname().unwrap_or_default();
        if should_force_login(&path) {
            let _ = window.location().set_href("/login");
        }
    }
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match auth_storage::token() {
        Some(token) => builder.header(AUTH_HEADER, &token),
        None => builder,
    }
}

/// Send a built request and decode a JSON body, applying the shared error
/// and 401-interception path.
#[cfg(feature = "hydrate")]
async fn execute<T: serde::de::DeserializeOwned>(
    request: gloo_net::http::Request,
    path: &str,
) -> Result<T, ApiError> {
    let resp = request.send().await.map_err(|_| ApiError::Network)?;
    if resp.ok() {
        return resp.json::<T>().await.map_err(|_| ApiError::Decode);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if status == 401 && !is_auth_exempt(path) {
        emergency_logout();
    }
    Err(error_for_status(status, &body))
}

/// Variant of [`execute`] for endpoints that acknowledge with an empty body.
#[cfg(feature = "hydrate")]
async fn execute_empty(request: gloo_net::http::Request, path: &str) -> Result<(), ApiError> {
    let resp = request.send().await.map_err(|_| ApiError::Network)?;
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if status == 401 && !is_auth_exempt(path) {
        emergency_logout();
    }
    Err(error_for_status(status, &body))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = with_auth(gloo_net::http::Request::get(path))
        .build()
        .map_err(|_| ApiError::Network)?;
    execute(request, path).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_auth(gloo_net::http::Request::post(path))
        .json(body)
        .map_err(|_| ApiError::Network)?;
    execute(request, path).await
}

#[cfg(feature = "hydrate")]
async fn put_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_auth(gloo_net::http::Request::put(path))
        .json(body)
        .map_err(|_| ApiError::Network)?;
    execute(request, path).await
}

/// Authenticate with email/password via `POST /api/auth/login`.
///
/// # Errors
///
/// Transport failures, bad credentials (401), or a backend validation
/// message.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json("/api/auth/login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network)
    }
}

/// Free-tier signup via `POST /api/auth/register`. No session is created;
/// the response is a confirmation message.
///
/// # Errors
///
/// Transport failures or a backend validation message.
pub async fn register_basic(request: &RegisterBasicRequest) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/register", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// Premium signup via `POST /api/auth/register-premium`; returns a live
/// credential and profile on success.
///
/// # Errors
///
/// Transport failures or a backend validation message.
pub async fn register_premium(request: &RegisterPremiumRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/register-premium", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// Revalidate the stored credential via `GET /api/auth/me`.
///
/// # Errors
///
/// Transport failures, an expired session, or a malformed body.
pub async fn fetch_current_profile() -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/auth/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}

/// Ask for a reset email via `POST /api/auth/forgot-password`.
///
/// # Errors
///
/// Transport failures or a backend validation message.
pub async fn request_password_reset(email: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        post_json("/api/auth/forgot-password", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Network)
    }
}

/// Consume an emailed reset token via `POST /api/auth/reset-password`.
///
/// # Errors
///
/// Transport failures or a backend validation message (expired token, weak
/// password).
pub async fn reset_password(token: &str, new_password: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": token, "password": new_password });
        post_json("/api/auth/reset-password", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, new_password);
        Err(ApiError::Network)
    }
}

/// Partial profile update via `PUT /api/users/me`.
///
/// # Errors
///
/// Transport failures or a backend validation message.
pub async fn update_profile(update: &ProfileUpdate) -> Result<ProfileResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        put_json("/api/users/me", update).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(ApiError::Network)
    }
}

/// Change the password via `PUT /api/users/me/password`.
///
/// # Errors
///
/// Transport failures or a backend validation message (wrong current
/// password).
pub async fn update_password(current: &str, new: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "currentPassword": current, "newPassword": new });
        put_json("/api/users/me/password", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new);
        Err(ApiError::Network)
    }
}

/// Delete the account via `DELETE /api/users/me`.
///
/// # Errors
///
/// Transport failures or a backend validation message.
pub async fn delete_account() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = "/api/users/me";
        let request = with_auth(gloo_net::http::Request::delete(path))
            .build()
            .map_err(|_| ApiError::Network)?;
        execute_empty(request, path).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}

/// Current flight-price alerts for the user via `GET /api/alerts`.
///
/// # Errors
///
/// Transport failures or an expired session.
pub async fn fetch_alerts() -> Result<Vec<FlightAlert>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/alerts").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}

/// All registered users via `GET /api/admin/users`.
///
/// # Errors
///
/// Transport failures or an expired session.
pub async fn fetch_admin_users() -> Result<Vec<AdminUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}

/// Remove a user via `DELETE /api/admin/users/{id}`.
///
/// # Errors
///
/// Transport failures or a backend validation message.
pub async fn delete_admin_user(user_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = admin_user_endpoint(user_id);
        let request = with_auth(gloo_net::http::Request::delete(&path))
            .build()
            .map_err(|_| ApiError::Network)?;
        execute_empty(request, &path).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Network)
    }
}

/// All monitored routes via `GET /api/admin/routes`.
///
/// # Errors
///
/// Transport failures or an expired session.
pub async fn fetch_admin_routes() -> Result<Vec<MonitoredRoute>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/routes").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}

/// Reassign a route's scan tier via `PUT /api/admin/routes/{id}/tier`.
///
/// # Errors
///
/// Transport failures or a backend validation message.
pub async fn set_route_tier(route_id: &str, tier: u8) -> Result<MonitoredRoute, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = admin_route_tier_endpoint(route_id);
        let payload = serde_json::json!({ "tier": tier });
        put_json(&path, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (route_id, tier);
        Err(ApiError::Network)
    }
}

/// External-API usage statistics via `GET /api/admin/stats`.
///
/// # Errors
///
/// Transport failures or an expired session.
pub async fn fetch_usage_stats() -> Result<ApiUsageStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/stats").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network)
    }
}
