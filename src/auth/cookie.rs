//! Auth cookie formatting and parsing
//!
//! The browser-facing rendition of the token store: one cookie named
//! `auth_token` carrying the opaque bearer token.

/// Cookie name shared by the login handler and the route guard
pub const AUTH_COOKIE: &str = "auth_token";

/// Build the `Set-Cookie` value that persists a token for `ttl_days`
pub fn build_auth_cookie(token: &str, ttl_days: i64) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        AUTH_COOKIE,
        token,
        ttl_days * 86_400
    )
}

/// `Set-Cookie` value that deletes the auth cookie
pub fn clear_auth_cookie() -> &'static str {
    "auth_token=; Path=/; Max-Age=0; SameSite=Lax"
}

/// Extract the token from a raw `Cookie` request header, if present
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    for part in header.split(';') {
        let part = part.trim();
        if let Some(rest) = part.strip_prefix(AUTH_COOKIE) {
            if let Some(value) = rest.strip_prefix('=') {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}
