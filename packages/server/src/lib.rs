//! Broadcast chat server.
//!
//! Every connected client receives the entire message log whenever it changes
//! (connect, disconnect, new message), plus ephemeral "user is typing" signals.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
