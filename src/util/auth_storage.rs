//! localStorage persistence for the credential and the cached profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives page reloads through two origin-scoped entries: the
//! raw bearer token and a JSON-serialized profile snapshot. The in-memory
//! session state is the source of truth while the app runs; this cache is
//! rewritten on every session mutation and revalidated once per load.
//!
//! All functions no-op outside the browser so SSR rendering stays
//! deterministic.

use crate::net::types::Profile;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "globegenius_token";
#[cfg(feature = "hydrate")]
const PROFILE_KEY: &str = "globegenius_profile";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persist a freshly issued credential together with its profile, replacing
/// any prior session wholesale.
pub fn set_auth(token: &str, profile: &Profile) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(raw) = serde_json::to_string(profile) {
            let _ = storage.set_item(PROFILE_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, profile);
    }
}

/// The raw stored credential, if any.
#[must_use]
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// The last-cached profile. A snapshot that no longer deserializes is
/// treated as absent rather than an error.
#[must_use]
pub fn profile() -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(PROFILE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Rewrite only the cached profile, leaving the still-valid credential in
/// place. Used after profile mutations that return a fresh server copy.
pub fn update_profile_cache(profile: &Profile) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(profile) {
            let _ = storage.set_item(PROFILE_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile;
    }
}

/// Remove both entries. Idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(PROFILE_KEY);
        }
    }
}
