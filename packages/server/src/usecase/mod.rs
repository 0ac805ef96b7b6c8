//! UseCase layer: one use case per inbound event, executed serially by the hub.

mod broadcast_relay;
mod connect_participant;
mod disconnect_participant;
mod error;
mod hub;
mod notify_typing;
mod send_message;

pub use broadcast_relay::BroadcastRelay;
pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{BroadcastError, HubError};
pub use hub::{ChatHub, ChatHubHandle, HubCommand, HubStats};
pub use notify_typing::NotifyTypingUseCase;
pub use send_message::SendMessageUseCase;
