//! UI layer: axum routes and WebSocket transport.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
