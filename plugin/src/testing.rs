//! Shared helpers for driving the chat plugin headlessly in tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use bevy::input::InputPlugin;
use bevy::prelude::*;

use crate::chat::{ChatConfig, ChatPlugin, ChatView};
use crate::ws::{ConnectionEvent, ReadyState, Transport, TransportError};

#[derive(Debug)]
struct FakeState {
    ready_state: ReadyState,
    sent: Vec<String>,
    events: VecDeque<ConnectionEvent>,
}

/// In-memory transport: records sends and replays queued events.
///
/// Rejects sends with `NotOpen` until [`FakeTransport::open`] is called.
#[derive(Clone, Debug)]
pub struct FakeTransport {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                ready_state: ReadyState::Connecting,
                sent: Vec::new(),
                events: VecDeque::new(),
            })),
        }
    }
}

impl FakeTransport {
    pub fn open(&self) {
        let mut state = self.inner.lock().unwrap();
        state.ready_state = ReadyState::Open;
        state.events.push_back(ConnectionEvent::Open);
    }

    pub fn push_event(&self, event: ConnectionEvent) {
        let mut state = self.inner.lock().unwrap();
        if matches!(event, ConnectionEvent::Closed { .. }) {
            state.ready_state = ReadyState::Closed;
        }
        state.events.push_back(event);
    }

    pub fn sent(&self) -> Vec<String> {
        self.inner.lock().unwrap().sent.clone()
    }
}

impl Transport for FakeTransport {
    fn send(&self, text: String) -> Result<(), TransportError> {
        let mut state = self.inner.lock().unwrap();
        if state.ready_state != ReadyState::Open {
            return Err(TransportError::NotOpen);
        }
        state.sent.push(text);
        Ok(())
    }

    fn ready_state(&self) -> ReadyState {
        self.inner.lock().unwrap().ready_state
    }

    fn poll_event(&self) -> Option<ConnectionEvent> {
        self.inner.lock().unwrap().events.pop_front()
    }
}

/// Headless app with the chat plugin on `transport`, after the startup frame.
pub fn chat_app(transport: FakeTransport, config: ChatConfig) -> App {
    headless_app(ChatPlugin::new(config).with_transport(transport))
}

/// Headless app running `plugin`, after the startup frame.
pub fn headless_app(plugin: ChatPlugin) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, InputPlugin, plugin));
    app.update();
    app
}

static CAPTURED_LOGS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut logs) = CAPTURED_LOGS.lock() {
            logs.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

/// Route `log` records into a process-wide buffer. Safe to call repeatedly.
pub fn capture_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Captured records at `level` whose message contains `needle`.
///
/// The buffer is shared by every test in the binary, so pick a `needle`
/// only one test produces.
pub fn count_logs(level: log::Level, needle: &str) -> usize {
    CAPTURED_LOGS
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, message)| *l == level && message.contains(needle))
        .count()
}

/// Text of every line in the message list, first to last.
pub fn displayed_messages(app: &mut App) -> Vec<String> {
    let messages = app.world().resource::<ChatView>().messages;
    let Some(children) = app.world().get::<Children>(messages) else {
        return Vec::new();
    };
    let lines: &[Entity] = children;

    lines
        .iter()
        .map(|line| {
            app.world()
                .get::<Text>(*line)
                .map(|text| text.0.clone())
                .unwrap_or_default()
        })
        .collect()
}
