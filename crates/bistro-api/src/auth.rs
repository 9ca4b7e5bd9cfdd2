//! The token-issuing backend surface.

use async_trait::async_trait;
use tracing::{debug, info};
use validator::Validate;

use bistro_core::config::ApiConfig;
use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_session::{AuthBackend, Credentials, TokenPair};

use crate::client::{build_http_client, check_status, decode_envelope};
use crate::dto::{
    GuestLoginBody, GuestLoginData, LoginBody, LoginData, LogoutBody, RefreshBody, RefreshData,
};

/// Unauthenticated client for the token endpoints.
///
/// Kept separate from [`crate::ApiClient`] so the refresh coordinator
/// can hold it without a cycle: renewal must never route back through
/// the 401-retry path it exists to serve.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Builds the client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        Ok(Self {
            http: build_http_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> AppResult<T> {
        let mut builder = self.http.post(self.url(path)).json(body);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await.map_err(|err| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Request to {path} failed"),
                err,
            )
        })?;
        decode_envelope(response).await
    }

    async fn post_unit<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> AppResult<()> {
        let mut builder = self.http.post(self.url(path)).json(body);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await.map_err(|err| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Request to {path} failed"),
                err,
            )
        })?;
        check_status(response).await
    }

    /// Guest table login: trades a table QR token for a guest session.
    pub async fn guest_login(&self, body: &GuestLoginBody) -> AppResult<GuestLoginData> {
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        let data: GuestLoginData = self.post("/guest/auth/login", body, None).await?;
        info!(guest = data.guest.id, table = data.guest.table_number, "Guest logged in");
        Ok(data)
    }
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl AuthBackend for AuthClient {
    async fn login(&self, credentials: &Credentials) -> AppResult<TokenPair> {
        let body = LoginBody {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;

        let data: LoginData = self.post("/auth/login", &body, None).await?;
        info!(account = data.account.id, "Logged in");
        Ok(TokenPair {
            access_token: data.access_token,
            refresh_token: data.refresh_token,
        })
    }

    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let body = RefreshBody {
            refresh_token: refresh_token.to_string(),
        };
        let data: RefreshData = self.post("/auth/refresh-token", &body, None).await?;
        debug!("Token pair renewed");
        Ok(TokenPair {
            access_token: data.access_token,
            refresh_token: data.refresh_token,
        })
    }

    async fn logout(&self, access_token: &str, refresh_token: &str) -> AppResult<()> {
        let body = LogoutBody {
            refresh_token: refresh_token.to_string(),
        };
        self.post_unit("/auth/logout", &body, Some(access_token))
            .await?;
        info!("Logged out");
        Ok(())
    }
}
