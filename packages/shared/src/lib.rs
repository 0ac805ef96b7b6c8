//! Shared library for the Hiroba chat server and client.
//!
//! - `protocol`: named events exchanged over the WebSocket
//! - `logger`: tracing subscriber setup
//! - `time`: timestamp helpers

pub mod logger;
pub mod protocol;
pub mod time;
