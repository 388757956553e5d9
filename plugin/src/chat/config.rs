use crate::chat::ExchangeCommand;

/// Address of the message server when none is configured.
pub const DEFAULT_SERVER_URL: &str = "ws://localhost:8082";

/// Configuration for the chat plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub url: String,
    /// Sent once as soon as the connection opens. Off unless set.
    pub initial_command: Option<ExchangeCommand>,
}

impl ChatConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_initial_command(mut self, command: ExchangeCommand) -> Self {
        self.initial_command = Some(command);
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            initial_command: None,
        }
    }
}
