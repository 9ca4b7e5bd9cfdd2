//! Integration tests for the session core: storage, renewal, and the
//! interplay between the actors that trigger refreshes.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use bistro_entity::Role;
use bistro_session::refresh::{RefreshCoordinator, RefreshOutcome};
use bistro_session::{AuthBackend, Credentials, SessionError, SessionState, TokenStore};
use chrono::Utc;

#[tokio::test]
async fn test_login_stores_tokens_and_logout_clears_them() {
    let store = Arc::new(TokenStore::with_default_sinks());
    let backend = helpers::MockBackend::new(Role::Owner);

    let pair = backend
        .login(&Credentials {
            email: "owner@bistro.example".to_string(),
            password: "secret123".to_string(),
        })
        .await
        .unwrap();
    store
        .set_tokens(&pair.access_token, &pair.refresh_token)
        .unwrap();
    assert_eq!(
        store.session_state(),
        SessionState::Authenticated(Role::Owner)
    );

    backend
        .logout(&pair.access_token, &pair.refresh_token)
        .await
        .unwrap();
    store.clear_tokens();
    assert_eq!(store.session_state(), SessionState::Unauthenticated);
    assert_eq!(backend.logout_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_concurrent_actors_share_one_renewal_call() {
    let store = Arc::new(TokenStore::with_default_sinks());
    let backend = helpers::MockBackend::new(Role::Employee);
    let coordinator = Arc::new(RefreshCoordinator::new(
        Arc::clone(&store),
        backend.clone(),
    ));

    let stale = helpers::stale_pair(Role::Employee);
    store
        .set_tokens(&stale.access_token, &stale.refresh_token)
        .unwrap();

    // Timer check, reactive 401 path, and a manual caller all at once.
    let timer = {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { coordinator.check_and_refresh().await })
    };
    let reactive = {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { coordinator.refresh_now().await })
    };
    let manual = {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { coordinator.refresh_now().await })
    };

    let timer_outcome = timer.await.unwrap().unwrap();
    let reactive_pair = reactive.await.unwrap().unwrap();
    let manual_pair = manual.await.unwrap().unwrap();

    assert_eq!(timer_outcome, RefreshOutcome::Refreshed);
    assert_eq!(reactive_pair.access_token, manual_pair.access_token);
    assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);

    // The store holds the renewed pair, on both surfaces.
    assert_ne!(store.access(), Some(stale.access_token));
    assert_eq!(
        store.session_state(),
        SessionState::Authenticated(Role::Employee)
    );
}

#[tokio::test]
async fn test_failed_renewal_leaves_the_session_usable() {
    let store = Arc::new(TokenStore::with_default_sinks());
    let backend = helpers::MockBackend::failing(Role::Owner);
    let coordinator = RefreshCoordinator::new(Arc::clone(&store), backend.clone());

    let stale = helpers::stale_pair(Role::Owner);
    store
        .set_tokens(&stale.access_token, &stale.refresh_token)
        .unwrap();

    let result = coordinator.refresh_now().await;
    assert!(matches!(result, Err(SessionError::RenewalFailed(_))));

    // Old tokens stay in place so a later attempt can still succeed.
    assert_eq!(store.access(), Some(stale.access_token));
    assert_eq!(store.refresh(), Some(stale.refresh_token));
    assert_eq!(
        store.session_state(),
        SessionState::Authenticated(Role::Owner)
    );
}

#[tokio::test]
async fn test_expired_refresh_token_ends_the_session() {
    let store = Arc::new(TokenStore::with_default_sinks());
    let backend = helpers::MockBackend::new(Role::Guest);
    let coordinator = RefreshCoordinator::new(Arc::clone(&store), backend.clone());

    let now = Utc::now().timestamp();
    let access = helpers::forge_token(Role::Guest, now - 60, now + 60);
    let dead_refresh = helpers::forge_token(Role::Guest, now - 7200, now - 3600);
    store.set_tokens(&access, &dead_refresh).unwrap();

    let result = coordinator.check_and_refresh().await;
    assert!(matches!(result, Err(SessionError::RefreshExpired)));

    // Both tokens are gone and no renewal call was made.
    assert_eq!(store.access(), None);
    assert_eq!(store.refresh(), None);
    assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 0);
}
