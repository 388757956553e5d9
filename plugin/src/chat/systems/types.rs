use bevy::prelude::*;

use crate::ws::TransportError;

/// Marker component for the container that rendered messages are appended to
#[derive(Component)]
pub struct MessageList;

/// Marker component for one rendered inbound message
#[derive(Component)]
pub struct DisplayedMessage;

/// Marker component for the message input
#[derive(Component)]
pub struct ChatInput;

/// Marker component for the button that submits the form
#[derive(Component)]
pub struct SendButton;

/// Marker component for focusable elements (like text inputs)
#[derive(Component)]
pub struct Focusable;

/// Editable text held by an input; its `Text` mirrors `value`.
#[derive(Component, Default, Debug, Clone)]
pub struct TextField {
    pub value: String,
}

/// Entities of the spawned chat UI.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ChatView {
    pub messages: Entity,
}

/// Resource tracking which input currently has keyboard focus
#[derive(Resource, Default, Debug)]
pub struct FocusedInput {
    pub entity: Option<Entity>,
}

/// The connection finished its handshake.
#[derive(Message, Debug, Clone)]
pub struct ConnectionOpened;

/// The transport reported a failure.
#[derive(Message, Debug, Clone)]
pub struct ConnectionFailed(pub TransportError);

/// The connection is gone.
#[derive(Message, Debug, Clone)]
pub struct ConnectionClosed {
    pub code: u16,
    pub reason: String,
}

/// One text message received from the server.
#[derive(Message, Debug, Clone)]
pub struct InboundMessage(pub String);

/// Text taken out of the input at the moment the form was submitted.
#[derive(Message, Debug, Clone)]
pub struct SubmitMessage(pub String);
