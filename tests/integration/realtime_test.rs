//! Integration tests for the realtime channel: connect-time
//! authentication and inbound event delivery.

mod helpers;

use std::time::Duration;

use futures::SinkExt;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_tungstenite::accept_hdr_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::handshake::server::{
    ErrorResponse, Request, Response,
};

use bistro_core::config::RealtimeConfig;
use bistro_core::events::{EventPayload, OrderEvent};
use bistro_entity::Role;
use bistro_realtime::RealtimeChannel;
use bistro_realtime::message::EVENT_NEW_ORDER;
use bistro_session::TokenStore;

/// Accepts one WebSocket connection, reporting the Authorization header
/// it arrived with, then plays the given frames to the client.
async fn spawn_server(frames: Vec<String>) -> (String, oneshot::Receiver<Option<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("ws://{}/ws", listener.local_addr().unwrap());
    let (auth_tx, auth_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut authorization = None;
        let ws = accept_hdr_async(stream, |req: &Request, resp: Response| {
            authorization = req
                .headers()
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .map(String::from);
            Ok::<Response, ErrorResponse>(resp)
        })
        .await
        .unwrap();
        let _ = auth_tx.send(authorization);

        let (mut write, _read) = futures::StreamExt::split(ws);
        // Give the client a moment to register subscriptions.
        tokio::time::sleep(Duration::from_millis(100)).await;
        for frame in frames {
            write.send(Message::Text(frame.into())).await.unwrap();
        }
        // Keep the connection open while the client drains events.
        tokio::time::sleep(Duration::from_secs(2)).await;
    });

    (endpoint, auth_rx)
}

fn new_order_frame() -> String {
    serde_json::json!({
        "event": "new-order",
        "data": {
            "id": 42,
            "guestId": 9,
            "tableNumber": 4,
            "dishSnapshot": {
                "id": 7,
                "name": "Pho Bo",
                "price": 65000,
                "description": "Beef noodle soup",
                "image": "https://img.example/pho.png",
                "status": "Available",
                "createdAt": "2026-08-25T10:00:00Z",
                "updatedAt": "2026-08-25T10:00:00Z",
            },
            "quantity": 2,
            "status": "Pending",
            "createdAt": "2026-08-25T11:00:00Z",
            "updatedAt": "2026-08-25T11:00:00Z",
        },
    })
    .to_string()
}

#[tokio::test]
async fn test_handshake_carries_the_access_token() {
    let (endpoint, auth_rx) = spawn_server(vec![]).await;
    let config = RealtimeConfig {
        endpoint,
        ..RealtimeConfig::default()
    };

    let channel = RealtimeChannel::connect(&config, "access-123").await.unwrap();
    let seen = auth_rx.await.unwrap();
    assert_eq!(seen.as_deref(), Some("Bearer access-123"));
    channel.close();
}

#[tokio::test]
async fn test_inbound_frames_reach_subscribers() {
    let (endpoint, _auth_rx) = spawn_server(vec![new_order_frame()]).await;
    let config = RealtimeConfig {
        endpoint,
        ..RealtimeConfig::default()
    };

    let channel = RealtimeChannel::connect(&config, "access-123").await.unwrap();
    let mut orders = channel.subscribe(EVENT_NEW_ORDER);

    let event = tokio::time::timeout(Duration::from_secs(2), orders.recv())
        .await
        .expect("no event within timeout")
        .unwrap();
    assert!(matches!(
        event.payload,
        EventPayload::Order(OrderEvent::Created { order_id: 42, .. })
    ));
    channel.close();
}

#[tokio::test]
async fn test_credential_does_not_follow_token_rotation() {
    let (endpoint, auth_rx) = spawn_server(vec![]).await;
    let config = RealtimeConfig {
        endpoint,
        ..RealtimeConfig::default()
    };

    let store = TokenStore::with_default_sinks();
    let first = helpers::live_pair(Role::Owner);
    store
        .set_tokens(&first.access_token, &first.refresh_token)
        .unwrap();

    let access = store.access().unwrap();
    let channel = RealtimeChannel::connect(&config, &access).await.unwrap();
    assert_eq!(auth_rx.await.unwrap().unwrap(), format!("Bearer {access}"));

    // Rotate the stored tokens; the live channel keeps the credential
    // it connected with.
    let now = chrono::Utc::now().timestamp();
    let rotated_access = helpers::forge_token(Role::Owner, now, now + 600);
    let rotated_refresh = helpers::forge_token(Role::Owner, now, now + 7200);
    store.set_tokens(&rotated_access, &rotated_refresh).unwrap();
    assert_ne!(store.access(), Some(access.clone()));
    assert_eq!(channel.credential(), format!("Bearer {access}"));
    channel.close();
}
