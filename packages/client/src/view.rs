//! Rendered state of the chat window.

use hiroba_shared::protocol::{ChatEntry, ServerEvent};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Order in which the log is displayed.
///
/// Only affects rendering; the server always sends the log in append order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayOrder {
    /// Oldest first
    #[default]
    Chronological,
    /// Newest first
    NewestFirst,
}

/// Client-side view: the last received log plus the typing indicator.
#[derive(Debug, Clone, Default)]
pub struct ChatView {
    entries: Vec<ChatEntry>,
    typing_user: Option<String>,
    order: DisplayOrder,
}

impl ChatView {
    pub fn new(order: DisplayOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Apply one pushed event
    pub fn apply(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::NewMessage(payload) => self.on_log_received(payload.messages),
            ServerEvent::UserTyping(payload) => self.on_typing_received(payload.user),
        }
    }

    /// Replace the whole log and clear the typing indicator
    pub fn on_log_received(&mut self, messages: Vec<ChatEntry>) {
        self.entries = messages;
        self.typing_user = None;
    }

    /// Show "<user> is typing..." until the next log arrives (last typer wins)
    pub fn on_typing_received(&mut self, user: String) {
        self.typing_user = Some(user);
    }

    pub fn typing_indicator(&self) -> Option<String> {
        self.typing_user
            .as_ref()
            .map(|user| format!("{} is typing...", user))
    }

    /// Entries in display order
    pub fn displayed_entries(&self) -> Vec<&ChatEntry> {
        match self.order {
            DisplayOrder::Chronological => self.entries.iter().collect(),
            DisplayOrder::NewestFirst => self.entries.iter().rev().collect(),
        }
    }

    /// One line per entry, then the typing indicator if any
    pub fn render(&self) -> String {
        let mut output = String::new();
        for entry in self.displayed_entries() {
            output.push_str(&format_entry(entry));
            output.push('\n');
        }
        if let Some(indicator) = self.typing_indicator() {
            output.push_str(&indicator);
            output.push('\n');
        }
        output
    }
}

/// Format one entry as "user: message" with the user in bold.
///
/// Content is printed as received.
pub fn format_entry(entry: &ChatEntry) -> String {
    format!("{}{}{}: {}", BOLD, entry.user, RESET, entry.message)
}
