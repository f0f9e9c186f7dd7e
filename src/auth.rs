//! Identity extraction from the access proxy.
//!
//! The portal sits behind an access proxy that forwards a JWT in a cookie.
//! Signature verification happened at the proxy; here we only read the
//! payload to learn who the user is. All failures are soft: a missing or
//! unreadable token just means no derived username.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde_json::Value;

/// Name of the cookie the access proxy sets.
pub const ACCESS_COOKIE: &str = "CF_Authorization";

/// Extract a cookie value from a `Cookie` header string.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

/// Extract the username from an access JWT.
///
/// Field priority in the payload:
/// 1. `custom.upn` (Azure)
/// 2. `custom.email` (Google)
/// 3. `email` (one-time PIN and friends)
///
/// Email-shaped values are reduced to their local part.
pub fn username_from_access_jwt(jwt: &str) -> Option<String> {
    let segments: Vec<&str> = jwt.split('.').collect();
    if segments.len() != 3 {
        log::warn!("access token is not a compact JWT");
        return None;
    }

    let payload = decode_segment(segments[1])?;
    let claims: Value = match serde_json::from_slice(&payload) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("access token payload is not JSON: {err}");
            return None;
        }
    };

    let raw = claims
        .pointer("/custom/upn")
        .and_then(Value::as_str)
        .or_else(|| claims.pointer("/custom/email").and_then(Value::as_str))
        .or_else(|| claims.get("email").and_then(Value::as_str))?;

    let name = raw.split('@').next().unwrap_or(raw);
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// JWT segments are base64url without padding, but tolerate standard
/// alphabets too.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| STANDARD.decode(segment))
        .map_err(|err| {
            log::warn!("could not decode access token payload: {err}");
            err
        })
        .ok()
}
