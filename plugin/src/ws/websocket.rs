//! tokio-tungstenite backed [`Transport`].
//!
//! The socket lives on its own thread with a small tokio runtime. Outgoing
//! text is forwarded through an unbounded channel; everything that happens on
//! the socket is pushed back as a [`ConnectionEvent`] and picked up with
//! [`Transport::poll_event`].

use futures_util::{SinkExt, StreamExt};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::Notify;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use url::Url;

use crate::ws::{ConnectionEvent, ReadyState, Transport, TransportError};

/// Close code reported when the connection ends without a close frame.
const ABNORMAL_CLOSURE: u16 = 1006;

/// How long the writer gets to flush the closing handshake.
const CLOSE_FLUSH_TIMEOUT: Duration = Duration::from_secs(1);

/// Work queued for the writer half of the socket.
#[derive(Debug, PartialEq, Eq)]
enum Outbound {
    Text(String),
    Close,
}

/// The one WebSocket connection of a client.
///
/// Dropping it closes the connection with a close frame.
pub struct WebSocketTransport {
    sender: UnboundedSender<Outbound>,
    ready_state: Arc<AtomicU32>,
    events: Mutex<Receiver<ConnectionEvent>>,
}

impl WebSocketTransport {
    /// Start connecting to `url` and return immediately.
    ///
    /// Failures (bad URL, refused TCP, failed handshake) are not returned here;
    /// they show up as an `Error` event followed by a `Closed` event.
    pub fn connect(url: impl Into<String>) -> Self {
        let (sender, outbound) = unbounded_channel::<Outbound>();
        let (event_tx, event_rx) = mpsc::channel();
        let ready_state = Arc::new(AtomicU32::new(ReadyState::Connecting as u32));

        let task = ConnectionTask {
            url: url.into(),
            ready_state: ready_state.clone(),
            events: event_tx,
        };

        // Spawn on a separate thread with its own tokio runtime
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .worker_threads(2)
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::debug!("[WebSocket] Failed to create runtime: {}", e);
                    task.fail(TransportError::Connect(e.to_string()), "Runtime unavailable");
                    return;
                }
            };

            rt.block_on(task.run(outbound));
        });

        Self {
            sender,
            ready_state,
            events: Mutex::new(event_rx),
        }
    }

    /// Start the closing handshake. Only an open connection moves to `Closing`;
    /// the final `Closed` event arrives once the server answers.
    pub fn close(&self) {
        let moved = self.ready_state.compare_exchange(
            ReadyState::Open as u32,
            ReadyState::Closing as u32,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
        if moved.is_ok() {
            log::info!("[WebSocket] Closing");
            let _ = self.sender.send(Outbound::Close);
        }
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        // A connection still handshaking is closed by the writer once it
        // sees the outbound channel has gone away.
        self.close();
    }
}

impl Transport for WebSocketTransport {
    /// Browser semantics: an error while connecting, a silent discard once
    /// the connection is closing or closed.
    fn send(&self, text: String) -> Result<(), TransportError> {
        match self.ready_state() {
            ReadyState::Connecting => Err(TransportError::NotOpen),
            ReadyState::Open => self
                .sender
                .send(Outbound::Text(text))
                .map_err(|_| TransportError::Disconnected),
            ReadyState::Closing | ReadyState::Closed => {
                log::warn!(
                    "[WebSocket] Discarding {} bytes, connection is closed",
                    text.len()
                );
                Ok(())
            }
        }
    }

    fn ready_state(&self) -> ReadyState {
        ReadyState::from_u32(self.ready_state.load(Ordering::SeqCst))
    }

    fn poll_event(&self) -> Option<ConnectionEvent> {
        self.events.lock().ok()?.try_recv().ok()
    }
}

/// State moved onto the connection thread.
///
/// Failures are logged at debug level here; they reach the owner as events.
struct ConnectionTask {
    url: String,
    ready_state: Arc<AtomicU32>,
    events: Sender<ConnectionEvent>,
}

impl ConnectionTask {
    fn set_state(&self, state: ReadyState) {
        self.ready_state.store(state as u32, Ordering::SeqCst);
    }

    fn dispatch(&self, event: ConnectionEvent) {
        log::debug!("[WebSocket] Dispatching {:?}", event);
        // The receiving side is gone once the transport has been dropped.
        let _ = self.events.send(event);
    }

    /// Mark the connection closed and report `error` followed by an abnormal close.
    fn fail(&self, error: TransportError, reason: &str) {
        self.set_state(ReadyState::Closed);
        self.dispatch(ConnectionEvent::Error(error));
        self.dispatch(ConnectionEvent::Closed {
            code: ABNORMAL_CLOSURE,
            reason: reason.to_string(),
        });
    }

    async fn run(self, mut outbound: UnboundedReceiver<Outbound>) {
        log::info!("[WebSocket] Connecting to {}", self.url);

        let url = match Url::parse(&self.url) {
            Ok(u) if u.scheme() == "ws" => u,
            Ok(u) => {
                log::debug!("[WebSocket] Unsupported scheme: {}", u.scheme());
                self.fail(
                    TransportError::InvalidUrl(format!("unsupported scheme '{}'", u.scheme())),
                    "Invalid URL",
                );
                return;
            }
            Err(e) => {
                log::debug!("[WebSocket] Invalid URL: {}", e);
                self.fail(TransportError::InvalidUrl(e.to_string()), "Invalid URL");
                return;
            }
        };

        let host = url.host_str().unwrap_or("localhost");
        let port = url.port_or_known_default().unwrap_or(80);
        let addr = format!("{}:{}", host, port);

        log::info!("[WebSocket] Connecting TCP to {}", addr);

        let tcp_stream = match TcpStream::connect(&addr).await {
            Ok(stream) => stream,
            Err(e) => {
                log::debug!("[WebSocket] TCP connection failed: {}", e);
                self.fail(TransportError::Connect(e.to_string()), "Connection failed");
                return;
            }
        };

        let request = match self.url.as_str().into_client_request() {
            Ok(req) => req,
            Err(e) => {
                log::debug!("[WebSocket] Failed to create request: {}", e);
                self.fail(TransportError::Handshake(e.to_string()), "Invalid request");
                return;
            }
        };

        let ws_stream = match tokio_tungstenite::client_async(request, tcp_stream).await {
            Ok((stream, response)) => {
                log::info!(
                    "[WebSocket] Connected successfully (status: {})",
                    response.status()
                );
                stream
            }
            Err(e) => {
                log::debug!("[WebSocket] Handshake failed: {}", e);
                self.fail(TransportError::Handshake(e.to_string()), "Handshake failed");
                return;
            }
        };

        self.set_state(ReadyState::Open);
        self.dispatch(ConnectionEvent::Open);

        let (mut write, mut read) = ws_stream.split();

        // Forward outgoing messages until asked to close, the transport is
        // dropped, or the read side has finished
        let shutdown = Arc::new(Notify::new());
        let shutdown_for_send = shutdown.clone();
        let send_task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    next = outbound.recv() => match next {
                        Some(Outbound::Text(text)) => {
                            if let Err(e) = write.send(Message::Text(text.into())).await {
                                log::error!("[WebSocket] Send error: {}", e);
                                break;
                            }
                        }
                        Some(Outbound::Close) | None => break,
                    },
                    _ = shutdown_for_send.notified() => break,
                }
            }
            // Sends our close frame, or flushes the reply to the server's
            if let Err(e) = write.close().await {
                log::debug!("[WebSocket] Close handshake: {}", e);
            }
        });

        while let Some(msg_result) = read.next().await {
            match msg_result {
                Ok(Message::Text(text)) => {
                    self.dispatch(ConnectionEvent::Message(text.as_str().to_owned()));
                }
                Ok(Message::Binary(data)) => {
                    log::debug!("[WebSocket] Ignoring binary frame ({} bytes)", data.len());
                }
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                    // Handled by tungstenite
                }
                Ok(Message::Close(frame)) => {
                    let (code, reason) = frame
                        .map(|f| (u16::from(f.code), f.reason.as_str().to_owned()))
                        .unwrap_or((1000, String::new()));
                    log::info!("[WebSocket] Received close: {} {}", code, reason);
                    self.set_state(ReadyState::Closed);
                    self.dispatch(ConnectionEvent::Closed { code, reason });
                    break;
                }
                Ok(Message::Frame(_)) => {}
                Err(e) => {
                    log::debug!("[WebSocket] Read error: {}", e);
                    self.fail(TransportError::Read(e.to_string()), "Connection error");
                    break;
                }
            }
        }

        if self.ready_state.load(Ordering::SeqCst) != ReadyState::Closed as u32 {
            self.set_state(ReadyState::Closed);
            self.dispatch(ConnectionEvent::Closed {
                code: ABNORMAL_CLOSURE,
                reason: "Connection lost".to_string(),
            });
        }

        shutdown.notify_one();
        if tokio::time::timeout(CLOSE_FLUSH_TIMEOUT, send_task).await.is_err() {
            log::debug!("[WebSocket] Writer did not finish closing in time");
        }
        log::info!("[WebSocket] Connection ended");
    }
}
