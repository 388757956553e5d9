//! WebSocket Transport
//!
//! A single text-message WebSocket connection backed by tokio-tungstenite.
//! No Bevy dependencies - socket I/O runs on a dedicated thread and events
//! are drained by whoever owns the transport.

mod error;
mod transport;
mod websocket;

pub use error::TransportError;
pub use transport::{ConnectionEvent, ReadyState, Transport};
pub use websocket::WebSocketTransport;
