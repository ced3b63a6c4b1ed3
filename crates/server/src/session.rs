//! Session cookie plumbing. The Supabase access token is stored in one
//! HTTP-only cookie; server functions schedule cookie changes through a
//! [`CookieSlot`] that the axum middleware applies to the response.
//!
//! There is no transparent refresh. When the access token expires the
//! user is sent back through the login page.

use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use cookie::Cookie;
use shared_types::AppError;
use std::sync::{Arc, Mutex};

pub const SESSION_COOKIE: &str = "bantay_session";

/// Supabase access tokens live for an hour by default.
const SESSION_MAX_AGE_SECS: i64 = 3600;

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

/// Build a Set-Cookie header value carrying the access token.
pub fn build_session_cookie(token: &str) -> Result<HeaderValue, AppError> {
    let mut cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(SESSION_MAX_AGE_SECS))
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string())
        .map_err(|_| AppError::internal("Session cookie value is not a valid header"))
}

/// Build a Set-Cookie header value that clears the session cookie.
pub fn build_clear_cookie() -> Result<HeaderValue, AppError> {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();

    HeaderValue::from_str(&cookie.to_string())
        .map_err(|_| AppError::internal("Clear cookie value is not a valid header"))
}

/// Extract the access token from the request's Cookie header.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == SESSION_COOKIE {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Pending cookie change scheduled by a server function, applied by the
/// middleware after the handler runs.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set(String),
    Clear,
}

/// Shared slot the middleware inserts into request extensions so server
/// functions can schedule cookie changes.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

/// Schedule the session cookie to be set on the response.
pub fn schedule_session_cookie(token: &str) {
    set_slot(PendingCookieAction::Set(token.to_string()));
}

/// Schedule the session cookie to be cleared on the response.
pub fn schedule_clear_cookie() {
    set_slot(PendingCookieAction::Clear);
}

fn set_slot(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            if let Ok(mut guard) = slot.0.lock() {
                *guard = Some(action);
            }
        }
    }
}

/// Read the session token from the current server-function request, or
/// fail with Unauthorized when no cookie is present.
pub fn require_session() -> Result<String, AppError> {
    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::internal("Not running inside a request"))?;
    let parts = ctx.parts_mut();
    extract_session_token(&parts.headers)
        .ok_or_else(|| AppError::unauthorized("Not signed in"))
}

/// Permissive session middleware.
///
/// Inserts a [`CookieSlot`] into request extensions and, after the
/// handler runs, applies whatever cookie action a server function
/// scheduled. Never rejects a request itself — authorization is decided
/// downstream.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let slot = CookieSlot::default();
    req.extensions_mut().insert(slot.clone());

    let mut response = next.run(req).await;

    let action = slot.0.lock().ok().and_then(|mut guard| guard.take());
    if let Some(action) = action {
        let header_value = match action {
            PendingCookieAction::Set(token) => build_session_cookie(&token),
            PendingCookieAction::Clear => build_clear_cookie(),
        };
        match header_value {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to build session cookie header");
            }
        }
    }

    response
}
