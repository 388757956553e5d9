//! Chat Plugin for Bevy
//!
//! Connects on build, spawns the chat UI on startup and wires the connection
//! and input events to their handler systems.

use bevy::prelude::*;
use std::sync::Mutex;

use crate::chat::systems::*;
use crate::chat::{ChatClient, ChatConfig};
use crate::ws::{Transport, WebSocketTransport};

pub struct ChatPlugin {
    config: ChatConfig,
    /// Pre-built transport (wrapped for interior mutability so `build` can take it).
    transport: Mutex<Option<Box<dyn Transport>>>,
}

impl Default for ChatPlugin {
    fn default() -> Self {
        Self::new(ChatConfig::default())
    }
}

impl ChatPlugin {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            transport: Mutex::new(None),
        }
    }

    /// Use `transport` instead of opening a WebSocket to the configured URL.
    pub fn with_transport(self, transport: impl Transport) -> Self {
        let transport: Box<dyn Transport> = Box::new(transport);
        if let Ok(mut guard) = self.transport.lock() {
            *guard = Some(transport);
        }
        self
    }

    fn take_transport(&self) -> Box<dyn Transport> {
        let injected = self.transport.lock().ok().and_then(|mut guard| guard.take());
        match injected {
            Some(transport) => transport,
            None => Box::new(WebSocketTransport::connect(self.config.url.clone())),
        }
    }
}

impl Plugin for ChatPlugin {
    fn build(&self, app: &mut App) {
        log::info!("Building chat plugin for {}", self.config.url);

        let connection = self.take_transport();
        app.insert_resource(ChatClient::new(connection, self.config.clone()));

        app.add_message::<ConnectionOpened>()
            .add_message::<ConnectionFailed>()
            .add_message::<ConnectionClosed>()
            .add_message::<InboundMessage>()
            .add_message::<SubmitMessage>()
            .init_resource::<FocusedInput>()
            .add_systems(Startup, spawn_chat_ui)
            .add_systems(
                Update,
                (
                    poll_connection,
                    (
                        on_connection_open,
                        on_connection_error,
                        on_connection_closed,
                        render_inbound_messages,
                    ),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    handle_input_interactions,
                    handle_keyboard_input,
                    submit_messages,
                    sync_text_fields,
                )
                    .chain(),
            );

        log::info!("Chat plugin configured");
    }
}
