//! Session cookie round trips: what the middleware writes must be what
//! the extractors read back.

use pretty_assertions::assert_eq;
use server::session::{build_clear_cookie, build_session_cookie, extract_session_token};

use axum::http::{header, HeaderMap, HeaderValue};

#[test]
fn written_cookie_reads_back_from_the_header() {
    let set_cookie = build_session_cookie("token-abc").unwrap();
    let serialized = set_cookie.to_str().unwrap();

    // the name=value prefix of Set-Cookie is what the browser echoes back
    let pair = serialized.split(';').next().unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_str(pair).unwrap());

    assert_eq!(
        extract_session_token(&headers).as_deref(),
        Some("token-abc")
    );
}

#[test]
fn session_cookie_is_http_only_and_scoped_to_root() {
    let value = build_session_cookie("tok").unwrap();
    let s = value.to_str().unwrap();
    assert!(s.contains("HttpOnly"));
    assert!(s.contains("Path=/"));
    assert!(s.contains("SameSite=Lax"));
}

#[test]
fn clear_cookie_expires_the_session_immediately() {
    let value = build_clear_cookie().unwrap();
    let s = value.to_str().unwrap();
    assert!(s.starts_with("bantay_session="));
    assert!(s.contains("Max-Age=0"));
}

#[test]
fn token_is_found_among_unrelated_cookies() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; _ga=GA1.2; bantay_session=xyz; locale=en"),
    );
    assert_eq!(extract_session_token(&headers).as_deref(), Some("xyz"));
}

#[test]
fn absent_cookie_means_no_session() {
    let headers = HeaderMap::new();
    assert_eq!(extract_session_token(&headers), None);
}
