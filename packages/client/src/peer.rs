//! Outbound channel handle of the client peer.

use tokio::sync::mpsc;

use hiroba_shared::protocol::{ChatEntry, ClientEvent, TypingPayload};

use crate::error::ClientError;

/// Handle used to emit events to the server.
///
/// Constructed once per process and passed explicitly to the input handlers; the
/// receiving half is drained by whichever WebSocket session is currently open, so
/// events emitted while reconnecting are sent once the connection is back.
#[derive(Debug, Clone)]
pub struct PeerChannel {
    tx: mpsc::UnboundedSender<ClientEvent>,
}

impl PeerChannel {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ClientEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Emit a `message` event with the text exactly as entered
    pub fn submit(&self, user: &str, text: &str) -> Result<(), ClientError> {
        self.emit(ClientEvent::Message(ChatEntry::new(user, text)))
    }

    /// Emit a `typing` event
    pub fn typing(&self, user: &str) -> Result<(), ClientError> {
        self.emit(ClientEvent::Typing(TypingPayload {
            user: user.to_string(),
        }))
    }

    fn emit(&self, event: ClientEvent) -> Result<(), ClientError> {
        self.tx.send(event).map_err(|_| ClientError::ChannelClosed)
    }
}
