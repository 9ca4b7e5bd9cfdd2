//! Session and token refresh configuration.

use serde::{Deserialize, Serialize};

/// Settings for the background refresh loop.
///
/// The check interval must be strictly shorter than the shortest expected
/// access-token lifetime so at least one check lands inside every token's
/// validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds between refresh checks.
    #[serde(default = "default_check_interval")]
    pub check_interval_seconds: u64,
    /// Consecutive transient renewal failures tolerated before the loop
    /// surfaces the error and stops.
    #[serde(default = "default_max_failures")]
    pub max_consecutive_failures: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            check_interval_seconds: default_check_interval(),
            max_consecutive_failures: default_max_failures(),
        }
    }
}

fn default_check_interval() -> u64 {
    1
}

fn default_max_failures() -> u32 {
    3
}
