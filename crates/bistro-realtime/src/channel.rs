//! The realtime channel connection.
//!
//! One connection per client lifetime. The access token captured here
//! authenticates the handshake and is never refreshed afterwards, even
//! when the token store rotates.

use std::sync::Arc;

use bistro_core::config::RealtimeConfig;
use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_core::events::DomainEvent;
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{info, warn};

use crate::dispatcher::EventDispatcher;
use crate::message::InboundFrame;

/// Builds the WebSocket upgrade request with the bearer credential
/// attached. The token the caller passes here is the one the server
/// sees; nothing re-reads the token store afterwards.
pub fn build_handshake_request(endpoint: &str, access_token: &str) -> AppResult<Request> {
    let mut request = endpoint.into_client_request().map_err(|err| {
        AppError::with_source(
            ErrorKind::Realtime,
            format!("Invalid realtime endpoint {endpoint}"),
            err,
        )
    })?;
    let bearer = HeaderValue::from_str(&format!("Bearer {access_token}"))
        .map_err(|err| AppError::with_source(ErrorKind::Realtime, "Invalid access token", err))?;
    request.headers_mut().insert(AUTHORIZATION, bearer);
    Ok(request)
}

/// A live connection to the backend event stream.
pub struct RealtimeChannel {
    dispatcher: Arc<EventDispatcher>,
    bearer: String,
    reader: JoinHandle<()>,
}

impl RealtimeChannel {
    /// Connect and start reading frames in a background task.
    pub async fn connect(config: &RealtimeConfig, access_token: &str) -> AppResult<Self> {
        let request = build_handshake_request(&config.endpoint, access_token)?;
        let (stream, _) = connect_async(request).await.map_err(|err| {
            AppError::with_source(ErrorKind::Realtime, "WebSocket handshake failed", err)
        })?;
        info!(endpoint = %config.endpoint, "Realtime channel connected");

        let dispatcher = Arc::new(EventDispatcher::new(config.channel_buffer_size));
        let reader = tokio::spawn(read_loop(stream, Arc::clone(&dispatcher)));

        Ok(Self {
            dispatcher,
            bearer: format!("Bearer {access_token}"),
            reader,
        })
    }

    /// Subscribe to a named event stream.
    pub fn subscribe(&self, event: &str) -> broadcast::Receiver<DomainEvent> {
        self.dispatcher.subscribe(event)
    }

    /// The dispatcher backing this connection.
    pub fn dispatcher(&self) -> &Arc<EventDispatcher> {
        &self.dispatcher
    }

    /// The bearer credential presented at connect time. This stays
    /// fixed for the lifetime of the connection.
    pub fn credential(&self) -> &str {
        &self.bearer
    }

    /// Tear the connection down.
    pub fn close(self) {
        self.reader.abort();
    }
}

async fn read_loop(
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    dispatcher: Arc<EventDispatcher>,
) {
    let (_write, mut read) = stream.split();
    while let Some(message) = read.next().await {
        match message {
            Ok(Message::Text(text)) => match InboundFrame::parse(&text) {
                Ok(frame) => dispatcher.dispatch(frame),
                Err(error) => warn!(%error, "Unparseable realtime frame"),
            },
            Ok(Message::Close(_)) => {
                info!("Realtime channel closed by server");
                break;
            }
            Ok(_) => {}
            Err(error) => {
                warn!(%error, "Realtime channel read failed");
                break;
            }
        }
    }
}
