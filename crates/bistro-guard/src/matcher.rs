//! Path classification for the routing guard.

use bistro_core::config::guard::GuardConfig;

/// The guard's view of a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Staff-only management area.
    Manage,
    /// Guest-only ordering area.
    GuestArea,
    /// Unauthenticated-only login entry.
    Login,
    /// Not covered by any configured pattern; the guard does not apply.
    Unmatched,
}

/// Classifies request paths against the configured patterns.
///
/// Matching is by path-segment prefix: `/manage` matches `/manage` and
/// `/manage/dashboard` but not `/management`.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    manage: Vec<String>,
    guest: Vec<String>,
    login: Vec<String>,
}

impl PathMatcher {
    /// Builds a matcher from guard configuration.
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            manage: config.manage_paths.clone(),
            guest: config.guest_paths.clone(),
            login: config.login_paths.clone(),
        }
    }

    /// Classifies a path. Total: every path maps to exactly one class.
    pub fn classify(&self, path: &str) -> PathClass {
        if Self::matches_any(&self.manage, path) {
            PathClass::Manage
        } else if Self::matches_any(&self.guest, path) {
            PathClass::GuestArea
        } else if Self::matches_any(&self.login, path) {
            PathClass::Login
        } else {
            PathClass::Unmatched
        }
    }

    fn matches_any(prefixes: &[String], path: &str) -> bool {
        prefixes.iter().any(|prefix| {
            path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

impl Default for PathMatcher {
    fn default() -> Self {
        Self::new(&GuardConfig::default())
    }
}
