//! Session-driven shell concerns: navigation visibility and logout.

use tracing::warn;

use bistro_core::result::AppResult;
use bistro_entity::Role;
use bistro_session::{AuthBackend, SessionState, TokenStore};

/// Who a navigation entry is shown to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Shown regardless of session state.
    Everyone,
    /// Shown only to an authenticated guest.
    GuestOnly,
    /// Shown only to authenticated staff (Owner or Employee).
    StaffOnly,
    /// Shown only when no session is present.
    SignedOut,
}

/// One entry in the navigation shell.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    /// Display label.
    pub label: &'static str,
    /// Navigation target.
    pub href: &'static str,
    /// Visibility rule.
    pub audience: Audience,
}

/// The full navigation menu, before visibility filtering.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        href: "/",
        audience: Audience::Everyone,
    },
    NavItem {
        label: "Menu",
        href: "/guest/menu",
        audience: Audience::GuestOnly,
    },
    NavItem {
        label: "My Orders",
        href: "/guest/orders",
        audience: Audience::GuestOnly,
    },
    NavItem {
        label: "Manage",
        href: "/manage/dashboard",
        audience: Audience::StaffOnly,
    },
    NavItem {
        label: "Login",
        href: "/login",
        audience: Audience::SignedOut,
    },
];

/// Filters the navigation menu for the current session state.
///
/// Pure function of the state, so it can be recomputed on every state
/// change without touching the store.
pub fn visible_items(state: &SessionState) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| match item.audience {
            Audience::Everyone => true,
            Audience::GuestOnly => matches!(state, SessionState::Authenticated(Role::Guest)),
            Audience::StaffOnly => matches!(
                state,
                SessionState::Authenticated(Role::Owner | Role::Employee)
            ),
            Audience::SignedOut => matches!(state, SessionState::Unauthenticated),
        })
        .collect()
}

/// Ends the session.
///
/// The server-side invalidation is best effort; local tokens are
/// cleared even when it fails, so the client never stays signed in
/// against its will.
pub async fn logout(store: &TokenStore, backend: &dyn AuthBackend) -> AppResult<()> {
    if let (Some(access), Some(refresh)) = (store.access(), store.refresh()) {
        if let Err(err) = backend.logout(&access, &refresh).await {
            warn!(%err, "Server logout failed; clearing local session anyway");
        }
    }
    store.clear_tokens();
    Ok(())
}
