//! Wire protocol for the broadcast chat.
//!
//! Every frame is a JSON text message carrying one named event:
//!
//! ```text
//! {"event": "<name>", "data": <payload>}
//! ```
//!
//! | Direction     | Event         | Payload                     |
//! |---------------|---------------|-----------------------------|
//! | client→server | `message`     | `{user, message}`           |
//! | client→server | `typing`      | `{user}`                    |
//! | server→client | `new-message` | `{messages: [ChatEntry]}`   |
//! | server→client | `user-typing` | `{user}`                    |

use serde::{Deserialize, Serialize};

/// One logged unit of chat content.
///
/// Missing fields deserialize as empty strings; the server never rejects input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub message: String,
}

impl ChatEntry {
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            message: message.into(),
        }
    }
}

/// Payload of `typing` and `user-typing`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingPayload {
    #[serde(default)]
    pub user: String,
}

/// Payload of `new-message`: the full log in append order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLogPayload {
    pub messages: Vec<ChatEntry>,
}

/// Events emitted by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Submit a chat entry
    Message(ChatEntry),
    /// Ephemeral "user is typing" signal
    Typing(TypingPayload),
}

/// Events pushed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// The entire message log
    NewMessage(MessageLogPayload),
    /// Relayed typing signal
    UserTyping(TypingPayload),
}
