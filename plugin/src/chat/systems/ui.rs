use bevy::prelude::*;

use crate::chat::systems::{
    ChatInput, ChatView, Focusable, FocusedInput, MessageList, SendButton, TextField,
};

const PANEL_COLOR: Color = Color::srgb(0.12, 0.12, 0.14);
const INPUT_COLOR: Color = Color::srgb(0.2, 0.2, 0.24);
const BUTTON_COLOR: Color = Color::srgb(0.25, 0.45, 0.8);
const BORDER_COLOR: Color = Color::srgb(0.35, 0.35, 0.4);

/// Spawn the message list and the form row, and focus the input
pub fn spawn_chat_ui(mut commands: Commands, mut focused: ResMut<FocusedInput>) {
    let root = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
        ))
        .id();

    let messages = commands
        .spawn((
            MessageList,
            Node {
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                overflow: Overflow::scroll_y(),
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .id();

    let form = commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(8.0),
                height: Val::Px(40.0),
                ..default()
            },
        ))
        .id();

    let input = commands
        .spawn((
            ChatInput,
            TextField::default(),
            Focusable,
            Interaction::default(),
            Text::new(""),
            TextFont::from_font_size(18.0),
            Node {
                flex_grow: 1.0,
                padding: UiRect::axes(Val::Px(8.0), Val::Px(6.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(INPUT_COLOR),
            BorderColor::all(BORDER_COLOR),
        ))
        .id();

    let button = commands
        .spawn((
            SendButton,
            Button,
            Node {
                padding: UiRect::axes(Val::Px(16.0), Val::Px(6.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
        ))
        .with_child((Text::new("Send"), TextFont::from_font_size(18.0)))
        .id();

    commands.entity(form).add_children(&[input, button]);
    commands.entity(root).add_children(&[messages, form]);

    focused.entity = Some(input);
    commands.insert_resource(ChatView { messages });

    log::info!(
        "Spawned chat UI: root={:?} messages={:?} input={:?}",
        root,
        messages,
        input
    );
}
