//! Infrastructure layer: concrete implementations of domain interfaces.

pub mod dto;
pub mod message_pusher;
