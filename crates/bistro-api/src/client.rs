//! The authenticated REST client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use bistro_core::config::ApiConfig;
use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_session::TokenStore;
use bistro_session::refresh::RefreshCoordinator;

use crate::dto::{ApiResponse, ErrorResponse};

/// REST client for everything behind authentication.
///
/// Every request carries the current access token from the store. A 401
/// response triggers exactly one renewal through the shared refresh
/// coordinator followed by one retry; concurrent 401s collapse into a
/// single renewal call.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<TokenStore>,
    coordinator: Arc<RefreshCoordinator>,
}

impl ApiClient {
    /// Builds the client from configuration.
    pub fn new(
        config: &ApiConfig,
        store: Arc<TokenStore>,
        coordinator: Arc<RefreshCoordinator>,
    ) -> AppResult<Self> {
        let http = build_http_client(config)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
            coordinator,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.dispatch::<(), T>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        self.dispatch(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        self.dispatch(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.dispatch::<(), T>(Method::DELETE, path, None).await
    }

    /// Sends one request, renewing tokens and retrying once on a 401.
    async fn dispatch<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> AppResult<T> {
        let response = self
            .execute(method.clone(), path, body, self.store.access())
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return decode_envelope(response).await;
        }

        debug!(path, "Backend returned 401; renewing tokens reactively");
        let pair = self.coordinator.refresh_now().await.map_err(|err| {
            warn!(path, %err, "Reactive renewal failed");
            AppError::from(err)
        })?;

        let response = self
            .execute(method, path, body, Some(pair.access_token))
            .await?;
        decode_envelope(response).await
    }

    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<String>,
    ) -> AppResult<reqwest::Response> {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder.send().await.map_err(|err| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Request to {path} failed"),
                err,
            )
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builds the underlying HTTP client with the configured timeout.
pub(crate) fn build_http_client(config: &ApiConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|err| {
            AppError::with_source(ErrorKind::ExternalService, "Failed to build HTTP client", err)
        })
}

/// Unwraps the backend's success envelope or maps the error status.
pub(crate) async fn decode_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> AppResult<T> {
    let status = response.status();
    if status.is_success() {
        let envelope: ApiResponse<T> = response.json().await.map_err(|err| {
            AppError::with_source(ErrorKind::Serialization, "Malformed backend response", err)
        })?;
        return Ok(envelope.data);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    Err(error_for_status(status, message))
}

/// Discards the body, mapping only the error status. For endpoints
/// whose success body carries no `data` field.
pub(crate) async fn check_status(response: reqwest::Response) -> AppResult<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    Err(error_for_status(status, message))
}

/// Maps a backend error status onto the application error taxonomy.
pub(crate) fn error_for_status(status: StatusCode, message: String) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::unauthorized(message),
        StatusCode::FORBIDDEN => AppError::forbidden(message),
        StatusCode::NOT_FOUND => AppError::not_found(message),
        StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => {
            AppError::validation(message)
        }
        _ => AppError::external_service(message),
    }
}
