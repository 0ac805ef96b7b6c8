//! The single server-session object.

use super::{MessageLog, SessionRegistry};

/// All shared mutable state of the chat.
///
/// Constructed once at startup and owned by the hub actor, which is the only writer.
#[derive(Debug, Default)]
pub struct ChatState {
    pub log: MessageLog,
    pub registry: SessionRegistry,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }
}
