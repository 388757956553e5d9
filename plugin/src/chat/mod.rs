//! # WebSocket Chat Plugin for Bevy
//!
//! Opens one WebSocket connection, sends whatever is typed into the input
//! field and renders every incoming text message as a new line in a list.
//!
//! ## Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_ws_chat::{ChatConfig, ChatPlugin};
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(ChatPlugin::new(ChatConfig::default()))
//!         .add_systems(Startup, |mut commands: Commands| {
//!             commands.spawn(Camera2d);
//!         })
//!         .run();
//! }
//! ```
pub mod plugin;

mod client;
mod command;
mod config;
mod systems;

pub use client::ChatClient;
pub use command::ExchangeCommand;
pub use config::{ChatConfig, DEFAULT_SERVER_URL};
pub use plugin::ChatPlugin;
pub use systems::*;
