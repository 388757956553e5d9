use crate::ws::TransportError;

/// Connection ready states (matching browser API numbering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ReadyState {
    Connecting = 0,
    Open = 1,
    Closing = 2,
    Closed = 3,
}

impl ReadyState {
    pub fn from_u32(value: u32) -> Self {
        match value {
            0 => ReadyState::Connecting,
            1 => ReadyState::Open,
            2 => ReadyState::Closing,
            _ => ReadyState::Closed,
        }
    }
}

/// Something observed on the connection, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    Open,
    Message(String),
    Error(TransportError),
    Closed { code: u16, reason: String },
}

/// A single bidirectional text-message channel.
///
/// Implementors queue events as they happen; `poll_event` hands them out
/// one at a time without blocking.
pub trait Transport: Send + Sync + 'static {
    /// Queue `text` for sending as one message.
    fn send(&self, text: String) -> Result<(), TransportError>;

    fn ready_state(&self) -> ReadyState;

    /// Take the next pending event, if any.
    fn poll_event(&self) -> Option<ConnectionEvent>;
}
