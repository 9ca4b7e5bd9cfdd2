//! Redirect target construction and the renewal route contract.

use url::form_urlencoded;

/// The login entry, with a signal to clear stale client-side tokens.
pub fn login_with_clear() -> String {
    "/login?clearTokens=true".to_string()
}

/// The home page.
pub fn home() -> &'static str {
    "/"
}

/// The renewal route, carrying the refresh token and the original
/// destination so navigation can resume once renewal completes.
pub fn renewal(refresh_token: &str, redirect: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("refreshToken", refresh_token)
        .append_pair("redirect", redirect)
        .finish();
    format!("/refresh-token?{query}")
}

/// A parsed visit to the renewal route.
///
/// On completion the caller must navigate the user to `redirect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalRequest {
    /// The refresh token carried through the redirect.
    pub refresh_token: String,
    /// The original destination to resume.
    pub redirect: String,
}

impl RenewalRequest {
    /// Parses the renewal route's query string. Returns `None` when
    /// either required parameter is missing.
    pub fn from_query(query: &str) -> Option<Self> {
        let mut refresh_token = None;
        let mut redirect = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "refreshToken" => refresh_token = Some(value.into_owned()),
                "redirect" => redirect = Some(value.into_owned()),
                _ => {}
            }
        }
        Some(Self {
            refresh_token: refresh_token?,
            redirect: redirect?,
        })
    }
}
