use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::chat::ChatClient;
use crate::chat::systems::{ChatInput, Focusable, FocusedInput, SendButton, SubmitMessage, TextField};

/// Focus clicked inputs and submit the form when the send button is pressed
pub fn handle_input_interactions(
    query: Query<(Entity, &Interaction, Has<Focusable>, Has<SendButton>), Changed<Interaction>>,
    mut inputs: Query<&mut TextField, With<ChatInput>>,
    mut focused: ResMut<FocusedInput>,
    mut submit: MessageWriter<SubmitMessage>,
) {
    for (entity, interaction, focusable, send_button) in &query {
        if *interaction != Interaction::Pressed {
            continue;
        }

        if focusable && focused.entity != Some(entity) {
            log::debug!("Focus moved to {:?}", entity);
            focused.entity = Some(entity);
        }

        if send_button {
            let Ok(mut field) = inputs.single_mut() else {
                log::warn!("Send pressed but there is no single chat input");
                continue;
            };
            submit.write(SubmitMessage(std::mem::take(&mut field.value)));
        }
    }
}

/// Edit the focused text field; Enter submits instead of inserting a newline
pub fn handle_keyboard_input(
    mut keyboard_events: MessageReader<KeyboardInput>,
    focused: Res<FocusedInput>,
    mut fields: Query<&mut TextField>,
    mut submit: MessageWriter<SubmitMessage>,
) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }

        let Some(entity) = focused.entity else {
            continue;
        };
        let Ok(mut field) = fields.get_mut(entity) else {
            continue;
        };

        match &event.logical_key {
            // Keys after Enter in the same frame belong to the next message
            Key::Enter => {
                submit.write(SubmitMessage(std::mem::take(&mut field.value)));
            }
            Key::Backspace => {
                field.value.pop();
            }
            Key::Space => field.value.push(' '),
            Key::Character(chars) => field.value.push_str(chars),
            _ => {}
        }
    }
}

/// Send each submitted text verbatim; failures are only logged
pub fn submit_messages(mut submissions: MessageReader<SubmitMessage>, client: Res<ChatClient>) {
    for SubmitMessage(text) in submissions.read() {
        if let Err(e) = client.send(text.clone()) {
            log::error!("Failed to send message: {}", e);
        }
    }
}

/// Mirror each changed text field into its displayed text
pub fn sync_text_fields(mut fields: Query<(&TextField, &mut Text), Changed<TextField>>) {
    for (field, mut text) in &mut fields {
        if text.0 != field.value {
            text.0.clone_from(&field.value);
        }
    }
}
