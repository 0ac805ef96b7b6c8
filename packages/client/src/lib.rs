//! Terminal client for the Hiroba broadcast chat.
//!
//! Renders the full message log pushed by the server, submits a line on Enter and
//! emits a typing signal for every other keystroke.

mod domain;
mod error;
mod input;
mod peer;
mod runner;
mod session;
mod ui;
mod view;

pub use error::ClientError;
pub use input::{TypingEventHandler, is_submit_key};
pub use peer::PeerChannel;
pub use runner::run_client;
pub use session::run_client_session;
pub use ui::{LinePrinter, Screen};
pub use view::{ChatView, DisplayOrder, format_entry};
