//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use hiroba_shared::protocol::ClientEvent;

use crate::{domain::ConnectionId, ui::state::AppState, usecase::ChatHubHandle};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: frames pushed by the hub (via rx channel)
/// are sent to this client's WebSocket connection.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Forward one inbound text frame to the hub.
///
/// Frames that are not a known client event are dropped.
async fn dispatch_text(hub: &ChatHubHandle, connection_id: ConnectionId, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(
                "Ignoring unrecognised frame from '{}': {}",
                connection_id,
                e
            );
            return;
        }
    };

    let result = match event {
        ClientEvent::Message(entry) => hub.submit_message(entry.into()).await,
        ClientEvent::Typing(payload) => hub.notify_typing(payload.user).await,
    };
    if let Err(e) = result {
        tracing::error!("Failed to forward event from '{}': {}", connection_id, e);
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive pushed frames
    let (tx, rx) = mpsc::unbounded_channel();
    let mut send_task = pusher_loop(rx, sender);

    if let Err(e) = state.hub.connect(connection_id, tx).await {
        tracing::error!("Failed to register connection '{}': {}", connection_id, e);
        send_task.abort();
        return;
    }

    let hub = state.hub.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!(
                        "Received text from '{}': {}",
                        connection_id,
                        text.as_str()
                    );
                    dispatch_text(&hub, connection_id, text.as_str()).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if let Err(e) = state.hub.disconnect(connection_id).await {
        tracing::error!("Failed to unregister connection '{}': {}", connection_id, e);
    }
}
