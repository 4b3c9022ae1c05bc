//! Bearer-token claim decoding.
//!
//! DESIGN
//! ======
//! The client only needs the expiry and role claims embedded in the JWT the
//! backend issued; it never verifies the signature (the server does that on
//! every request). Decoding is therefore just base64url on the payload
//! segment. Any malformed token is indistinguishable from an expired one:
//! both fail closed.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims the backend embeds in every credential.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch.
    #[serde(default)]
    pub iat: u64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

/// Validity of a stored credential at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
    /// No credential is stored.
    Missing,
    /// Decodes and has not reached its expiry.
    Valid,
    /// Expired or undecodable; both are treated the same.
    Invalid,
}

/// Decode the payload segment of `token` into [`Claims`].
/// Returns `None` on any structural, base64, or JSON failure.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    if segments.next().is_none() {
        // Two-segment strings are not JWTs.
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.as_bytes()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Classify an optionally-present credential against `now_secs`.
#[must_use]
pub fn token_status(token: Option<&str>, now_secs: u64) -> TokenStatus {
    let Some(token) = token else {
        return TokenStatus::Missing;
    };
    match decode_claims(token) {
        Some(claims) if now_secs < claims.exp => TokenStatus::Valid,
        _ => TokenStatus::Invalid,
    }
}

/// True when `token` is expired or cannot be decoded (fail-closed).
#[must_use]
pub fn is_expired(token: &str) -> bool {
    token_status(Some(token), now_secs()) != TokenStatus::Valid
}

/// Current wall-clock time in seconds since the Unix epoch.
#[must_use]
pub fn now_secs() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (js_sys::Date::now() / 1000.0).max(0.0) as u64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}
