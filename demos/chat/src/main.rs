use bevy::prelude::*;
use bevy_ws_chat::{ChatConfig, ChatPlugin};

fn main() {
    // Optional first argument overrides the server address
    let mut config = ChatConfig::default();
    if let Some(url) = std::env::args().nth(1) {
        config = config.with_url(url);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "WebSocket Chat".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ChatPlugin::new(config))
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    log::info!("Hello world!");
    commands.spawn(Camera2d);
}
