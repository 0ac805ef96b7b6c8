//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use hiroba_shared::protocol::{ClientEvent, ServerEvent};

use crate::{error::ClientError, ui::Screen, view::ChatView};

/// Run one WebSocket session until the user exits or the connection is lost.
///
/// Drains `outbound` into the socket and applies every pushed event to `view`,
/// repainting `screen` after each one. `on_connected` runs once the handshake
/// with the server has succeeded.
///
/// # Returns
///
/// * `Ok(())` - `outbound` was closed (user exit)
/// * `Err(ClientError)` - connection failed or was lost
pub async fn run_client_session(
    url: &str,
    outbound: &mut mpsc::UnboundedReceiver<ClientEvent>,
    view: &mut ChatView,
    screen: &mut Screen,
    on_connected: impl FnOnce(),
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server!");
    on_connected();

    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    if apply_frame(view, text.as_str()) {
                        screen.repaint(view);
                    }
                }
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("Server closed the connection");
                    return Err(ClientError::ConnectionClosed);
                }
                Some(Err(e)) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    return Err(ClientError::ConnectionError(e.to_string()));
                }
                Some(Ok(_)) => {}
            },
            outgoing = outbound.recv() => match outgoing {
                Some(event) => {
                    let json = serde_json::to_string(&event)?;
                    write
                        .send(Message::Text(json.into()))
                        .await
                        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
                }
                None => {
                    tracing::info!("Input closed, leaving chat");
                    write.send(Message::Close(None)).await.ok();
                    return Ok(());
                }
            },
        }
    }
}

/// Apply one pushed text frame to the view.
///
/// Returns `false` when the frame is not a known server event.
fn apply_frame(view: &mut ChatView, text: &str) -> bool {
    match serde_json::from_str::<ServerEvent>(text) {
        Ok(event) => {
            view.apply(event);
            true
        }
        Err(e) => {
            tracing::warn!("Ignoring unrecognised frame: {}", e);
            false
        }
    }
}
