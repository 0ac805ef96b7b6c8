//! Domain layer: chat state and the collaborator interfaces it depends on.

pub mod chat_state;
pub mod entity;
pub mod message_log;
pub mod message_pusher;
pub mod session_registry;
pub mod value_object;

pub use chat_state::ChatState;
pub use entity::{ChatEntry, SYSTEM_USER};
pub use message_log::MessageLog;
pub use message_pusher::{MessagePushError, MessagePusher, PusherChannel};
pub use session_registry::SessionRegistry;
pub use value_object::ConnectionId;

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
