//! Data Transfer Objects (DTOs) for the chat application.
//!
//! WebSocket event DTOs live in `hiroba_shared::protocol` so the client can use them.
//! - `http`: HTTP API response DTOs
//! - `conversion`: domain <-> wire conversions

pub mod conversion;
pub mod http;
