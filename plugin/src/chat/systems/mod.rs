mod connection;
mod input;
mod render;
mod types;
mod ui;

pub use connection::*;
pub use input::*;
pub use render::*;
pub use types::*;
pub use ui::*;
