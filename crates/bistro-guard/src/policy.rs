//! The guard decision table.

use bistro_entity::Role;
use bistro_session::decode_claims;

use crate::matcher::{PathClass, PathMatcher};
use crate::redirect;

/// The raw token cookies visible on a request.
#[derive(Debug, Clone, Default)]
pub struct RequestTokens {
    /// The `accessToken` cookie value, if present.
    pub access: Option<String>,
    /// The `refreshToken` cookie value, if present.
    pub refresh: Option<String>,
}

/// The outcome of a guard evaluation. Every combination of path class
/// and token presence maps to exactly one decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed unchanged.
    Allow,
    /// Send to the login entry, signalling stale client tokens.
    RedirectLogin,
    /// Send home (already authenticated, or role mismatch).
    RedirectHome,
    /// Send through the renewal route before resuming navigation.
    RedirectRenewal {
        /// The refresh token to renew with.
        refresh_token: String,
        /// The original destination.
        redirect: String,
    },
}

impl GuardDecision {
    /// The redirect target, `None` for [`GuardDecision::Allow`].
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::RedirectLogin => Some(redirect::login_with_clear()),
            Self::RedirectHome => Some(redirect::home().to_string()),
            Self::RedirectRenewal {
                refresh_token,
                redirect: target,
            } => Some(redirect::renewal(refresh_token, target)),
        }
    }
}

/// Evaluates the guard decision table.
///
/// Pure and synchronous: no network I/O, no clock beyond what cookie
/// expiry already encoded. A refresh cookie with unparseable claims is
/// treated identically to an absent one.
///
/// Priority order:
/// 1. privileged path without a refresh token: login (clear tokens);
/// 2. refresh token present:
///    a. login path: home;
///    b. privileged path without an access token: renewal route;
///    c. role mismatch (Guest on manage, staff on guest area): home;
/// 3. otherwise: allow.
pub fn evaluate(matcher: &PathMatcher, path: &str, tokens: &RequestTokens) -> GuardDecision {
    let class = matcher.classify(path);
    if class == PathClass::Unmatched {
        return GuardDecision::Allow;
    }

    // Malformed claims degrade to "no refresh token".
    let refresh = tokens
        .refresh
        .as_deref()
        .and_then(|token| decode_claims(token).ok().map(|claims| (token, claims.role)));

    match (class, refresh) {
        (PathClass::Manage | PathClass::GuestArea, None) => GuardDecision::RedirectLogin,
        (PathClass::Login, Some(_)) => GuardDecision::RedirectHome,
        (PathClass::Manage | PathClass::GuestArea, Some((token, role))) => {
            if tokens.access.is_none() {
                GuardDecision::RedirectRenewal {
                    refresh_token: token.to_string(),
                    redirect: path.to_string(),
                }
            } else if matches!(
                (class, role),
                (PathClass::Manage, Role::Guest)
                    | (PathClass::GuestArea, Role::Owner)
                    | (PathClass::GuestArea, Role::Employee)
            ) {
                GuardDecision::RedirectHome
            } else {
                GuardDecision::Allow
            }
        }
        (PathClass::Login, None) => GuardDecision::Allow,
        (PathClass::Unmatched, _) => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    use bistro_session::TokenClaims;

    fn forge(role: Role) -> String {
        let claims = TokenClaims {
            sub: 1,
            role,
            iat: 0,
            exp: i64::MAX / 2,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    fn tokens(access: Option<&str>, refresh: Option<&str>) -> RequestTokens {
        RequestTokens {
            access: access.map(String::from),
            refresh: refresh.map(String::from),
        }
    }

    #[test]
    fn test_privileged_without_refresh_redirects_to_login() {
        let matcher = PathMatcher::default();
        let decision = evaluate(&matcher, "/manage/dashboard", &tokens(None, None));
        assert_eq!(decision, GuardDecision::RedirectLogin);
        assert_eq!(
            decision.location().unwrap(),
            "/login?clearTokens=true"
        );

        let decision = evaluate(&matcher, "/guest/menu", &tokens(None, None));
        assert_eq!(decision, GuardDecision::RedirectLogin);
    }

    #[test]
    fn test_login_with_refresh_redirects_home() {
        let matcher = PathMatcher::default();
        let rt = forge(Role::Owner);
        let decision = evaluate(&matcher, "/login", &tokens(None, Some(&rt)));
        assert_eq!(decision, GuardDecision::RedirectHome);
        assert_eq!(decision.location().unwrap(), "/");
    }

    #[test]
    fn test_expired_access_redirects_through_renewal() {
        let matcher = PathMatcher::default();
        let rt = forge(Role::Owner);
        let decision = evaluate(&matcher, "/manage/dashboard", &tokens(None, Some(&rt)));
        assert_eq!(
            decision,
            GuardDecision::RedirectRenewal {
                refresh_token: rt.clone(),
                redirect: "/manage/dashboard".to_string(),
            }
        );
        let location = decision.location().unwrap();
        assert!(location.starts_with("/refresh-token?"));
        assert!(location.contains("redirect=%2Fmanage%2Fdashboard"));
    }

    #[test]
    fn test_role_mismatch_redirects_home() {
        let matcher = PathMatcher::default();
        let guest = forge(Role::Guest);
        let owner = forge(Role::Owner);
        let employee = forge(Role::Employee);

        let decision = evaluate(
            &matcher,
            "/manage/orders",
            &tokens(Some("at"), Some(&guest)),
        );
        assert_eq!(decision, GuardDecision::RedirectHome);

        let decision = evaluate(&matcher, "/guest/menu", &tokens(Some("at"), Some(&owner)));
        assert_eq!(decision, GuardDecision::RedirectHome);

        let decision = evaluate(
            &matcher,
            "/guest/menu",
            &tokens(Some("at"), Some(&employee)),
        );
        assert_eq!(decision, GuardDecision::RedirectHome);
    }

    #[test]
    fn test_matching_role_passes_through() {
        let matcher = PathMatcher::default();
        let owner = forge(Role::Owner);
        let guest = forge(Role::Guest);

        let decision = evaluate(
            &matcher,
            "/manage/dashboard",
            &tokens(Some("at"), Some(&owner)),
        );
        assert_eq!(decision, GuardDecision::Allow);

        let decision = evaluate(&matcher, "/guest/orders", &tokens(Some("at"), Some(&guest)));
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn test_unmatched_path_bypasses_guard() {
        let matcher = PathMatcher::default();
        let decision = evaluate(&matcher, "/orders", &tokens(None, None));
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn test_malformed_refresh_treated_as_absent() {
        let matcher = PathMatcher::default();
        let decision = evaluate(
            &matcher,
            "/manage/dashboard",
            &tokens(Some("at"), Some("not-a-token")),
        );
        assert_eq!(decision, GuardDecision::RedirectLogin);

        // On the login page a malformed refresh token allows entry.
        let decision = evaluate(&matcher, "/login", &tokens(None, Some("not-a-token")));
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn test_renewal_takes_priority_over_role_mismatch() {
        let matcher = PathMatcher::default();
        let guest = forge(Role::Guest);
        let decision = evaluate(&matcher, "/manage/dashboard", &tokens(None, Some(&guest)));
        assert!(matches!(
            decision,
            GuardDecision::RedirectRenewal { .. }
        ));
    }
}
