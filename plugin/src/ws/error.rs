use thiserror::Error;

/// Failures reported by a [`Transport`](super::Transport).
///
/// Connection-level variants arrive as [`ConnectionEvent::Error`](super::ConnectionEvent::Error);
/// `NotOpen` and `Disconnected` are returned from `send`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("TCP connection failed: {0}")]
    Connect(String),

    #[error("handshake failed: {0}")]
    Handshake(String),

    #[error("read error: {0}")]
    Read(String),

    #[error("WebSocket is not open")]
    NotOpen,

    #[error("connection task has shut down")]
    Disconnected,
}
