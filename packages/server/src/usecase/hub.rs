//! ChatHub Actor implementation
//!
//! The single owner of [`ChatState`]. Handlers never touch the state directly: they send
//! [`HubCommand`]s through a [`ChatHubHandle`], and the hub runs each command to completion
//! before receiving the next one. This serial turn is the only consistency mechanism the
//! chat needs, so the log and the session count are never locked.

use std::sync::Arc;

use hiroba_shared::time::now_millis;
use tokio::sync::{mpsc, oneshot};

use crate::domain::{ChatEntry, ChatState, ConnectionId, MessagePusher, PusherChannel};

use super::{
    broadcast_relay::BroadcastRelay, connect_participant::ConnectParticipantUseCase,
    disconnect_participant::DisconnectParticipantUseCase, error::HubError,
    notify_typing::NotifyTypingUseCase, send_message::SendMessageUseCase,
};

/// Capacity of the command queue
const COMMAND_BUFFER: usize = 1024;

/// Commands sent from handlers to the ChatHub actor
#[derive(Debug)]
pub enum HubCommand {
    /// New connection opened
    Connect {
        connection_id: ConnectionId,
        sender: PusherChannel,
    },
    /// Connection closed
    Disconnect { connection_id: ConnectionId },
    /// Chat entry submitted
    Message { entry: ChatEntry },
    /// User is typing
    Typing { user: String },
    /// Read counters
    Stats { reply: oneshot::Sender<HubStats> },
    /// Read the full log
    Snapshot {
        reply: oneshot::Sender<Vec<ChatEntry>>,
    },
}

/// Point-in-time counters of the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubStats {
    pub session_count: i64,
    pub message_count: usize,
    /// Unix timestamp (milliseconds) when the hub was created
    pub started_at: i64,
}

/// The ChatHub actor
pub struct ChatHub {
    state: ChatState,
    started_at: i64,
    connect_participant_usecase: ConnectParticipantUseCase,
    disconnect_participant_usecase: DisconnectParticipantUseCase,
    send_message_usecase: SendMessageUseCase,
    notify_typing_usecase: NotifyTypingUseCase,
    receiver: mpsc::Receiver<HubCommand>,
}

impl ChatHub {
    /// Create a hub and the handle used to reach it
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> (Self, ChatHubHandle) {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        let relay = BroadcastRelay::new(message_pusher.clone());

        let hub = Self {
            state: ChatState::new(),
            started_at: now_millis(),
            connect_participant_usecase: ConnectParticipantUseCase::new(
                message_pusher.clone(),
                relay.clone(),
            ),
            disconnect_participant_usecase: DisconnectParticipantUseCase::new(
                message_pusher.clone(),
                relay.clone(),
            ),
            send_message_usecase: SendMessageUseCase::new(relay),
            notify_typing_usecase: NotifyTypingUseCase::new(message_pusher),
            receiver,
        };

        (hub, ChatHubHandle { sender })
    }

    /// Create a hub and run it on a new tokio task
    pub fn spawn(message_pusher: Arc<dyn MessagePusher>) -> ChatHubHandle {
        let (hub, handle) = Self::new(message_pusher);
        tokio::spawn(hub.run());
        handle
    }

    /// Run the event loop until every handle is dropped
    pub async fn run(mut self) {
        tracing::info!("ChatHub started");

        while let Some(cmd) = self.receiver.recv().await {
            self.handle_command(cmd).await;
        }

        tracing::info!("ChatHub shutting down");
    }

    async fn handle_command(&mut self, cmd: HubCommand) {
        match cmd {
            HubCommand::Connect {
                connection_id,
                sender,
            } => {
                match self
                    .connect_participant_usecase
                    .execute(&mut self.state, connection_id, sender)
                    .await
                {
                    Ok(count) => tracing::info!(
                        "Connection '{}' opened ({} users connected)",
                        connection_id,
                        count
                    ),
                    Err(e) => tracing::warn!(
                        "Failed to broadcast log after '{}' connected: {}",
                        connection_id,
                        e
                    ),
                }
            }
            HubCommand::Disconnect { connection_id } => {
                match self
                    .disconnect_participant_usecase
                    .execute(&mut self.state, connection_id)
                    .await
                {
                    Ok(count) => tracing::info!(
                        "Connection '{}' closed ({} users connected)",
                        connection_id,
                        count
                    ),
                    Err(e) => tracing::warn!(
                        "Failed to broadcast log after '{}' disconnected: {}",
                        connection_id,
                        e
                    ),
                }
            }
            HubCommand::Message { entry } => {
                tracing::debug!("Message from '{}': {}", entry.user, entry.message);
                if let Err(e) = self
                    .send_message_usecase
                    .execute(&mut self.state, entry)
                    .await
                {
                    tracing::warn!("Failed to broadcast log after new message: {}", e);
                }
            }
            HubCommand::Typing { user } => {
                tracing::debug!("'{}' is typing", user);
                if let Err(e) = self.notify_typing_usecase.execute(user).await {
                    tracing::warn!("Failed to relay typing notification: {}", e);
                }
            }
            HubCommand::Stats { reply } => {
                let stats = HubStats {
                    session_count: self.state.registry.count(),
                    message_count: self.state.log.len(),
                    started_at: self.started_at,
                };
                // The requester may have given up; nothing to do then.
                let _ = reply.send(stats);
            }
            HubCommand::Snapshot { reply } => {
                let _ = reply.send(self.state.log.snapshot().to_vec());
            }
        }
    }
}

/// Cloneable handle to a running [`ChatHub`]
///
/// Commands sent through one handle are processed in the order they were sent.
#[derive(Clone)]
pub struct ChatHubHandle {
    sender: mpsc::Sender<HubCommand>,
}

impl ChatHubHandle {
    pub async fn connect(
        &self,
        connection_id: ConnectionId,
        sender: PusherChannel,
    ) -> Result<(), HubError> {
        self.send(HubCommand::Connect {
            connection_id,
            sender,
        })
        .await
    }

    pub async fn disconnect(&self, connection_id: ConnectionId) -> Result<(), HubError> {
        self.send(HubCommand::Disconnect { connection_id }).await
    }

    pub async fn submit_message(&self, entry: ChatEntry) -> Result<(), HubError> {
        self.send(HubCommand::Message { entry }).await
    }

    pub async fn notify_typing(&self, user: String) -> Result<(), HubError> {
        self.send(HubCommand::Typing { user }).await
    }

    /// Counters as of every command sent before this call
    pub async fn stats(&self) -> Result<HubStats, HubError> {
        let (reply, rx) = oneshot::channel();
        self.send(HubCommand::Stats { reply }).await?;
        rx.await.map_err(|_| HubError::Closed)
    }

    /// Full log as of every command sent before this call
    pub async fn snapshot(&self) -> Result<Vec<ChatEntry>, HubError> {
        let (reply, rx) = oneshot::channel();
        self.send(HubCommand::Snapshot { reply }).await?;
        rx.await.map_err(|_| HubError::Closed)
    }

    async fn send(&self, cmd: HubCommand) -> Result<(), HubError> {
        self.sender.send(cmd).await.map_err(|_| HubError::Closed)
    }
}
