use bevy::prelude::*;

use crate::chat::{ChatConfig, ExchangeCommand};
use crate::ws::{ConnectionEvent, Transport, TransportError};

/// Owns the single connection of the chat client.
///
/// Inserted by [`ChatPlugin`](crate::ChatPlugin) and lives as long as the app.
#[derive(Resource)]
pub struct ChatClient {
    connection: Box<dyn Transport>,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(connection: Box<dyn Transport>, config: ChatConfig) -> Self {
        Self { connection, config }
    }

    /// Send `text` exactly as given.
    ///
    /// Not guarded on the ready state; whatever the transport does with a
    /// message on a connection that is not open is what happens.
    pub fn send(&self, text: String) -> Result<(), TransportError> {
        log::debug!("ChatClient::send {} bytes", text.len());
        self.connection.send(text)
    }

    pub fn send_command(&self, command: &ExchangeCommand) -> Result<(), TransportError> {
        self.send(command.to_string())
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub(crate) fn poll_event(&self) -> Option<ConnectionEvent> {
        self.connection.poll_event()
    }
}
