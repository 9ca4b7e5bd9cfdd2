//! Refresh coordination with a single-flight renewal guarantee.

use std::pin::Pin;
use std::sync::Arc;

use chrono::Utc;
use futures::FutureExt;
use futures::future::Shared;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::backend::AuthBackend;
use crate::error::SessionError;
use crate::store::TokenStore;
use crate::token::{TokenPair, decode_claims};

type RenewalFuture =
    Pin<Box<dyn Future<Output = Result<TokenPair, SessionError>> + Send>>;
type SharedRenewal = Shared<RenewalFuture>;

/// Result of a single refresh check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No session present; nothing to refresh.
    Idle,
    /// The access token still has enough lifetime left.
    Fresh,
    /// A renewal completed and new tokens were stored.
    Refreshed,
}

/// Keeps the access token fresh without ever issuing two concurrent
/// renewal calls.
///
/// The in-flight marker is a single-slot shared future owned by this
/// instance, not a process-wide global, so separate coordinators (as in
/// tests) cannot cross-contaminate. Three actors funnel through it: the
/// timer loop, 401-triggered reactive refreshes, and any manual caller.
pub struct RefreshCoordinator {
    store: Arc<TokenStore>,
    backend: Arc<dyn AuthBackend>,
    in_flight: Mutex<Option<SharedRenewal>>,
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCoordinator").finish()
    }
}

impl RefreshCoordinator {
    /// Creates a coordinator over the given store and backend.
    pub fn new(store: Arc<TokenStore>, backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            store,
            backend,
            in_flight: Mutex::new(None),
        }
    }

    /// The token store this coordinator renews into.
    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    /// Runs one refresh check.
    ///
    /// 1. No tokens: no-op.
    /// 2. Refresh token expired: clear both tokens and fail with
    ///    [`SessionError::RefreshExpired`]. This takes priority over
    ///    access-token freshness.
    /// 3. Less than a third of the access token's lifetime remaining
    ///    (or an unparseable access token): renew.
    ///
    /// A malformed refresh token is treated as an absent one.
    pub async fn check_and_refresh(&self) -> Result<RefreshOutcome, SessionError> {
        let (Some(access), Some(refresh)) = (self.store.access(), self.store.refresh()) else {
            return Ok(RefreshOutcome::Idle);
        };

        let Ok(refresh_claims) = decode_claims(&refresh) else {
            debug!("Refresh token unparseable; treating session as absent");
            return Ok(RefreshOutcome::Idle);
        };

        let now = Utc::now().timestamp();
        if refresh_claims.is_expired_at(now) {
            info!("Refresh token expired; clearing session");
            self.store.clear_tokens();
            return Err(SessionError::RefreshExpired);
        }

        let needs_renewal = match decode_claims(&access) {
            Ok(claims) => claims.needs_renewal_at(now),
            // Unparseable access token is as good as an expired one.
            Err(_) => true,
        };

        if !needs_renewal {
            return Ok(RefreshOutcome::Fresh);
        }

        self.refresh_now().await?;
        Ok(RefreshOutcome::Refreshed)
    }

    /// Performs a renewal, deduplicating concurrent callers.
    ///
    /// If a renewal is already in flight, this awaits it and returns its
    /// result instead of starting a second network call. The slot clears
    /// unconditionally when the operation settles, success or failure.
    /// On failure the stored tokens are left untouched so a later
    /// attempt can still succeed.
    pub async fn refresh_now(&self) -> Result<TokenPair, SessionError> {
        let renewal = {
            let mut slot = self.in_flight.lock().await;
            match slot.as_ref() {
                Some(pending) => {
                    debug!("Joining in-flight renewal");
                    pending.clone()
                }
                None => {
                    let store = Arc::clone(&self.store);
                    let backend = Arc::clone(&self.backend);
                    let fut: RenewalFuture = Box::pin(async move {
                        let Some(refresh) = store.refresh() else {
                            return Err(SessionError::RefreshExpired);
                        };
                        let pair = backend
                            .refresh(&refresh)
                            .await
                            .map_err(SessionError::RenewalFailed)?;
                        store.set_tokens(&pair.access_token, &pair.refresh_token)?;
                        debug!("Token pair renewed");
                        Ok(pair)
                    });
                    let shared = fut.shared();
                    *slot = Some(shared.clone());
                    shared
                }
            }
        };

        let result = renewal.clone().await;

        let mut slot = self.in_flight.lock().await;
        if slot.as_ref().is_some_and(|pending| pending.ptr_eq(&renewal)) {
            *slot = None;
        }
        drop(slot);

        if let Err(e) = &result {
            warn!(error = %e, "Renewal settled with error");
        }
        result
    }
}
