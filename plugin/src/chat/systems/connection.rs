use bevy::prelude::*;

use crate::chat::ChatClient;
use crate::chat::systems::{ConnectionClosed, ConnectionFailed, ConnectionOpened, InboundMessage};
use crate::ws::ConnectionEvent;

/// Drain pending transport events, in delivery order, into Bevy messages
pub fn poll_connection(
    client: Res<ChatClient>,
    mut opened: MessageWriter<ConnectionOpened>,
    mut failed: MessageWriter<ConnectionFailed>,
    mut closed: MessageWriter<ConnectionClosed>,
    mut inbound: MessageWriter<InboundMessage>,
) {
    while let Some(event) = client.poll_event() {
        match event {
            ConnectionEvent::Open => {
                opened.write(ConnectionOpened);
            }
            ConnectionEvent::Message(text) => {
                inbound.write(InboundMessage(text));
            }
            ConnectionEvent::Error(error) => {
                failed.write(ConnectionFailed(error));
            }
            ConnectionEvent::Closed { code, reason } => {
                closed.write(ConnectionClosed { code, reason });
            }
        }
    }
}

pub fn on_connection_open(mut opened: MessageReader<ConnectionOpened>, client: Res<ChatClient>) {
    for _ in opened.read() {
        log::info!("Hello WebSocket! Connected to {}", client.config().url);

        let Some(command) = client.config().initial_command.as_ref() else {
            continue;
        };

        log::info!("Sending initial command: {}", command);
        if let Err(e) = client.send_command(command) {
            log::error!("Failed to send initial command: {}", e);
        }
    }
}

/// Errors are only logged; nothing is retried and nothing is shown.
pub fn on_connection_error(mut failed: MessageReader<ConnectionFailed>) {
    for ConnectionFailed(error) in failed.read() {
        log::error!("WebSocket error: {}", error);
    }
}

pub fn on_connection_closed(mut closed: MessageReader<ConnectionClosed>) {
    for event in closed.read() {
        log::info!(
            "WebSocket closed: code={} reason={}",
            event.code,
            event.reason
        );
    }
}
