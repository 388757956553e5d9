//! A minimal WebSocket chat client rendered with Bevy UI.
//!
//! [`ws`] holds the Bevy-free transport; [`chat`] the plugin that owns the
//! connection, spawns the UI and wires connection and input events.

pub mod chat;
pub mod ws;

#[cfg(test)]
mod testing;

pub use chat::*;
pub use ws::{ConnectionEvent, ReadyState, Transport, TransportError, WebSocketTransport};
