//! Integration tests for the routing guard middleware.

mod helpers;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use http::{Request, StatusCode, header};
use tower::ServiceExt;

use bistro_entity::Role;
use bistro_guard::{PathMatcher, route_guard};

fn guarded_app() -> Router {
    let matcher = Arc::new(PathMatcher::default());
    Router::new()
        .route("/", get(|| async { "home" }))
        .route("/login", get(|| async { "login" }))
        .route("/manage/dashboard", get(|| async { "dashboard" }))
        .route("/guest/menu", get(|| async { "menu" }))
        .route("/orders", get(|| async { "orders" }))
        .layer(from_fn_with_state(matcher, route_guard))
}

async fn navigate(path: &str, cookies: Option<String>) -> (StatusCode, Option<String>) {
    let mut builder = Request::builder().uri(path);
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    let response = guarded_app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    (response.status(), location)
}

#[tokio::test]
async fn test_privileged_path_without_refresh_redirects_to_login() {
    for path in ["/manage/dashboard", "/guest/menu"] {
        let (status, location) = navigate(path, None).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location.as_deref(), Some("/login?clearTokens=true"));
    }
}

#[tokio::test]
async fn test_login_with_refresh_redirects_home() {
    let pair = helpers::live_pair(Role::Owner);
    let (status, location) = navigate(
        "/login",
        Some(format!("refreshToken={}", pair.refresh_token)),
    )
    .await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_missing_access_token_routes_through_renewal() {
    let pair = helpers::live_pair(Role::Owner);
    let (status, location) = navigate(
        "/manage/dashboard",
        Some(format!("refreshToken={}", pair.refresh_token)),
    )
    .await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    let location = location.unwrap();
    assert!(location.starts_with("/refresh-token?refreshToken="));
    assert!(location.ends_with("&redirect=%2Fmanage%2Fdashboard"));
}

#[tokio::test]
async fn test_role_mismatch_redirects_home() {
    let guest = helpers::live_pair(Role::Guest);
    let (status, location) = navigate(
        "/manage/dashboard",
        Some(format!(
            "accessToken={}; refreshToken={}",
            guest.access_token, guest.refresh_token
        )),
    )
    .await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/"));

    let owner = helpers::live_pair(Role::Owner);
    let (status, location) = navigate(
        "/guest/menu",
        Some(format!(
            "accessToken={}; refreshToken={}",
            owner.access_token, owner.refresh_token
        )),
    )
    .await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_matching_role_passes_through() {
    let owner = helpers::live_pair(Role::Owner);
    let (status, _) = navigate(
        "/manage/dashboard",
        Some(format!(
            "accessToken={}; refreshToken={}",
            owner.access_token, owner.refresh_token
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let guest = helpers::live_pair(Role::Guest);
    let (status, _) = navigate(
        "/guest/menu",
        Some(format!(
            "accessToken={}; refreshToken={}",
            guest.access_token, guest.refresh_token
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unmatched_paths_bypass_the_guard() {
    for path in ["/", "/orders"] {
        let (status, _) = navigate(path, None).await;
        assert_eq!(status, StatusCode::OK, "{path} should not be guarded");
    }
}

#[tokio::test]
async fn test_malformed_refresh_cookie_is_treated_as_absent() {
    let (status, location) = navigate(
        "/manage/dashboard",
        Some("accessToken=at; refreshToken=garbage".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/login?clearTokens=true"));
}
