//! Client execution logic with reconnection support.

use std::time::Duration;

use crate::{
    domain::ReconnectBudget,
    error::ClientError,
    input::spawn_input_thread,
    peer::PeerChannel,
    session::run_client_session,
    ui::Screen,
    view::{ChatView, DisplayOrder},
};

const MAX_RECONNECT_RETRIES: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Run the chat client with reconnection logic
///
/// # Arguments
///
/// * `url` - WebSocket URL of the server (e.g., "ws://127.0.0.1:8080/ws")
/// * `user` - Display name attached to every message and typing signal
/// * `order` - How the log is displayed
pub async fn run_client(url: String, user: String, order: DisplayOrder) -> Result<(), ClientError> {
    let (channel, mut outbound) = PeerChannel::new();
    let (_input_handle, printer) = spawn_input_thread(channel, user.clone());
    let mut screen = Screen::new(&user, printer.await.ok().flatten());

    let mut view = ChatView::new(order);
    let mut budget = ReconnectBudget::new(MAX_RECONNECT_RETRIES);

    loop {
        tracing::info!("Attempting to connect to {} as '{}'", url, user);

        let result = run_client_session(&url, &mut outbound, &mut view, &mut screen, || {
            budget.on_connected()
        })
        .await;

        match result {
            Ok(()) => {
                tracing::info!("Client session ended normally");
                break;
            }
            Err(e) => {
                if outbound.is_closed() {
                    tracing::info!("Input closed while disconnected: {}", e);
                    break;
                }

                tracing::warn!("Connection lost: {}", e);

                if !budget.on_failure(&e) {
                    tracing::error!(
                        "Giving up after {} retries. Exiting.",
                        budget.max_retries()
                    );
                    return Err(e);
                }

                tracing::info!(
                    "Reconnecting in {} seconds... (retry {}/{})",
                    RECONNECT_INTERVAL_SECS,
                    budget.retry_number(),
                    budget.max_retries()
                );

                tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
            }
        }
    }

    Ok(())
}
