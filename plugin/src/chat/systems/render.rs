use bevy::prelude::*;

use crate::chat::systems::{ChatView, DisplayedMessage, InboundMessage};

const MESSAGE_FONT_SIZE: f32 = 16.0;
const MESSAGE_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);

/// Append every inbound message as the last child of the message list
pub fn render_inbound_messages(
    mut commands: Commands,
    mut inbound: MessageReader<InboundMessage>,
    view: Option<Res<ChatView>>,
) {
    let Some(view) = view else {
        if !inbound.is_empty() {
            log::warn!("Dropping {} messages, chat UI not spawned", inbound.len());
            inbound.clear();
        }
        return;
    };

    for InboundMessage(text) in inbound.read() {
        log::info!("{}", text);

        // Bevy text is never interpreted as markup, so the payload renders literally
        let line = commands
            .spawn((
                Text::new(text.clone()),
                TextFont::from_font_size(MESSAGE_FONT_SIZE),
                TextColor(MESSAGE_COLOR),
                DisplayedMessage,
            ))
            .id();
        commands.entity(view.messages).add_child(line);

        log::debug!("Appended message line {:?}", line);
    }
}
