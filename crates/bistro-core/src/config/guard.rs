//! Routing guard configuration.

use serde::{Deserialize, Serialize};

/// Path patterns matched by the routing guard.
///
/// Requests whose path matches none of these prefixes bypass the guard
/// entirely. That is a deliberate scope limitation, not a bug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Staff-only path prefixes.
    #[serde(default = "default_manage_paths")]
    pub manage_paths: Vec<String>,
    /// Guest-only path prefixes.
    #[serde(default = "default_guest_paths")]
    pub guest_paths: Vec<String>,
    /// Unauthenticated-only entry paths.
    #[serde(default = "default_login_paths")]
    pub login_paths: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            manage_paths: default_manage_paths(),
            guest_paths: default_guest_paths(),
            login_paths: default_login_paths(),
        }
    }
}

fn default_manage_paths() -> Vec<String> {
    vec!["/manage".to_string()]
}

fn default_guest_paths() -> Vec<String> {
    vec!["/guest".to_string()]
}

fn default_login_paths() -> Vec<String> {
    vec!["/login".to_string()]
}
