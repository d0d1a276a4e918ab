//! Route guard
//!
//! Pure decision function over `(path, token presence)` plus the axum
//! middleware that applies it before any handler runs. Presence is the only
//! check at this layer; a forged or expired token is indistinguishable from
//! a valid one here, and the external API's 401 is the real authorization.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::cookie;

/// Prefix under which every route requires a token
pub const PROTECTED_PREFIX: &str = "/dashboard";

/// Public-only login path
pub const LOGIN_PATH: &str = "/login";

/// Where authenticated users land
pub const LANDING_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
    /// Redirect and delete any stale auth cookie on the way out
    RedirectAndClear(&'static str),
}

/// Decide what to do with a navigation request.
pub fn evaluate(path: &str, token_present: bool) -> GuardDecision {
    if is_protected(path) && !token_present {
        return GuardDecision::RedirectAndClear(LOGIN_PATH);
    }
    if path == LOGIN_PATH && token_present {
        return GuardDecision::Redirect(LANDING_PATH);
    }
    GuardDecision::Allow
}

fn is_protected(path: &str) -> bool {
    path == PROTECTED_PREFIX || path.starts_with("/dashboard/")
}

/// Middleware applying the guard on every request
pub async fn route_guard(request: Request, next: Next) -> Response {
    let token_present = request
        .headers()
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(cookie::token_from_cookie_header)
        .is_some();

    match evaluate(request.uri().path(), token_present) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => Redirect::to(target).into_response(),
        GuardDecision::RedirectAndClear(target) => {
            let mut response = Redirect::to(target).into_response();
            response.headers_mut().append(
                header::SET_COOKIE,
                HeaderValue::from_static(cookie::clear_auth_cookie()),
            );
            response
        }
    }
}
