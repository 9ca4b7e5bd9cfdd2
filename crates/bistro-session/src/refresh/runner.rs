//! The background refresh loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use bistro_core::config::session::SessionConfig;

use crate::error::SessionError;

use super::coordinator::RefreshCoordinator;

/// Drives the coordinator on a fixed cadence.
///
/// The interval must be strictly shorter than the shortest expected
/// access-token lifetime so at least one check lands inside any token's
/// validity window. The first check runs eagerly at activation.
pub struct RefreshLoop {
    coordinator: Arc<RefreshCoordinator>,
    config: SessionConfig,
}

impl RefreshLoop {
    /// Creates a loop over the given coordinator.
    pub fn new(coordinator: Arc<RefreshCoordinator>, config: SessionConfig) -> Self {
        Self {
            coordinator,
            config,
        }
    }

    /// Runs until shutdown or until an error is surfaced.
    ///
    /// Fatal errors (a dead refresh token) stop the loop immediately.
    /// Transient renewal failures leave the tokens untouched and are
    /// retried on subsequent ticks; once the consecutive-failure budget
    /// is exhausted the last error is surfaced and the loop stops. The
    /// caller decides whether to redirect to login.
    ///
    /// Shutdown cancels only the loop; a renewal call already in flight
    /// keeps running until it settles, at which point the coordinator's
    /// marker still clears.
    pub async fn run<F>(self, mut shutdown: watch::Receiver<bool>, on_error: F)
    where
        F: Fn(SessionError) + Send + Sync,
    {
        let period = Duration::from_secs(self.config.check_interval_seconds.max(1));
        let mut interval = tokio::time::interval(period);
        let mut consecutive_failures = 0u32;

        info!(period_seconds = period.as_secs(), "Refresh loop started");

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match self.coordinator.check_and_refresh().await {
                        Ok(outcome) => {
                            debug!(?outcome, "Refresh check complete");
                            consecutive_failures = 0;
                        }
                        Err(e) if e.is_fatal() => {
                            info!(error = %e, "Session ended; stopping refresh loop");
                            on_error(e);
                            break;
                        }
                        Err(e) => {
                            consecutive_failures += 1;
                            warn!(
                                error = %e,
                                consecutive_failures,
                                "Renewal failed; will retry"
                            );
                            if consecutive_failures >= self.config.max_consecutive_failures {
                                on_error(e);
                                break;
                            }
                        }
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Refresh loop shutting down");
                        break;
                    }
                }
            }
        }
    }
}
