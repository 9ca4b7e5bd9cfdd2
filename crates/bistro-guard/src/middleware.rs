//! Axum middleware adapter for the routing guard.
//!
//! Runs before any handler executes and turns guard decisions into
//! temporary redirects. Layer it with
//! `axum::middleware::from_fn_with_state(matcher, route_guard)`.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use cookie::Cookie;
use tracing::debug;

use crate::matcher::PathMatcher;
use crate::policy::{self, GuardDecision, RequestTokens};

impl RequestTokens {
    /// Extracts the token cookies from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut tokens = Self::default();
        for header in headers.get_all(COOKIE) {
            let Ok(value) = header.to_str() else {
                continue;
            };
            for cookie in Cookie::split_parse(value).flatten() {
                match cookie.name() {
                    "accessToken" => tokens.access = Some(cookie.value().to_string()),
                    "refreshToken" => tokens.refresh = Some(cookie.value().to_string()),
                    _ => {}
                }
            }
        }
        tokens
    }
}

/// Guard middleware: evaluates the decision table against the request
/// path and cookies, redirecting before the handler runs.
pub async fn route_guard(
    State(matcher): State<Arc<PathMatcher>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let tokens = RequestTokens::from_headers(request.headers());

    match policy::evaluate(&matcher, &path, &tokens) {
        GuardDecision::Allow => next.run(request).await,
        decision => {
            // location() is Some for every non-Allow decision.
            let location = decision.location().unwrap_or_else(|| "/".to_string());
            debug!(path, %location, "Guard redirect");
            Redirect::temporary(&location).into_response()
        }
    }
}
