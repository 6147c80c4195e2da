use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{Error as WsError, Message},
};
use uuid::Uuid;

use crate::{
    codec::{decode_authorization, encode_request, DecodeError, EncodingError},
    domain::envelopes::{CommandAuthorization, CommandRequest, UnknownAction},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closing,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Accepted,
    Rejected(ConnectionState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    Connected,
    Authorized(CommandAuthorization),
    Unrecognized(UnknownAction),
    Closed,
    Error(String),
}

type SharedState = Arc<Mutex<ConnectionState>>;

fn lock_state(state: &SharedState) -> MutexGuard<'_, ConnectionState> {
    // the guarded value is a plain enum, a poisoned lock still holds a usable state
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Handle to a single backend socket. Dropping it closes the socket.
pub struct Connection {
    id: String,
    state: SharedState,
    outbox: UnboundedSender<Message>,
}

impl Connection {
    /// Start connecting to `url` and return straight away in [`ConnectionState::Connecting`].
    /// Must be called from within a tokio runtime.
    pub fn open(url: impl Into<String>, events: UnboundedSender<ConnectionEvent>) -> Self {
        let id = format!("{:X}", Uuid::new_v4().as_u128());
        let state = Arc::new(Mutex::new(ConnectionState::Connecting));
        let (outbox, outbox_source) = unbounded::<Message>();

        let worker = ConnectionWorker {
            id: id.clone(),
            url: url.into(),
            state: state.clone(),
            outbox_source,
            events,
        };
        tokio::spawn(worker.run());

        Connection { id, state, outbox }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> ConnectionState {
        *lock_state(&self.state)
    }

    /// Requests made while the socket is not open are dropped, not queued.
    pub fn send(&self, request: &CommandRequest) -> Result<SendOutcome, EncodingError> {
        let bytes = encode_request(request)?;

        let state = self.state();
        if state != ConnectionState::Open {
            log::warn!(
                "[{}] Connection closing, closed or not yet ready! Dropped {} ({state:?})",
                self.id,
                request.action_type()
            );
            return Ok(SendOutcome::Rejected(state));
        }

        match self.outbox.unbounded_send(Message::Binary(bytes)) {
            Ok(()) => Ok(SendOutcome::Accepted),
            Err(e) => {
                log::error!("[{}] Could not hand request to socket worker: {e}", self.id);
                Ok(SendOutcome::Rejected(ConnectionState::Closed))
            }
        }
    }

    pub fn close(&self) {
        {
            let mut state = lock_state(&self.state);
            match *state {
                ConnectionState::Closing | ConnectionState::Closed => return,
                _ => *state = ConnectionState::Closing,
            }
        }
        log::info!("[{}] Closing connection", self.id);
        self.outbox
            .unbounded_send(Message::Close(None))
            .unwrap_or_else(|e| log::debug!("[{}] Socket worker already gone: {e}", self.id));
    }
}

struct ConnectionWorker {
    id: String,
    url: String,
    state: SharedState,
    outbox_source: UnboundedReceiver<Message>,
    events: UnboundedSender<ConnectionEvent>,
}

impl ConnectionWorker {
    fn emit(&self, event: ConnectionEvent) {
        self.events
            .unbounded_send(event)
            .unwrap_or_else(|e| log::debug!("[{}] No one is listening for events: {e}", self.id));
    }

    fn mark_open(&self) {
        let mut state = lock_state(&self.state);
        if *state == ConnectionState::Connecting {
            *state = ConnectionState::Open;
        }
    }

    fn set_state(&self, next: ConnectionState) {
        *lock_state(&self.state) = next;
    }

    async fn run(mut self) {
        if let Err(e) = self.work().await {
            log::error!("[{}] Connection failed with error: {e}", self.id);
            self.emit(ConnectionEvent::Error(e.to_string()));
        }
        self.set_state(ConnectionState::Closed);
        log::info!("[{}] Connection closed", self.id);
        self.emit(ConnectionEvent::Closed);
    }

    async fn work(&mut self) -> Result<()> {
        // send() only accepts frames once open, so anything here is a close
        let ws_stream = tokio::select! {
            connected = connect_async(self.url.as_str()) => {
                connected
                    .map_err(|e| anyhow!("Failed to connect to {}: {e}", self.url))?
                    .0
            }
            _ = self.outbox_source.next() => {
                log::info!("[{}] Closed before the handshake finished", self.id);
                return Ok(());
            }
        };
        log::info!("[{}] Websocket connected to {}", self.id, self.url);
        self.mark_open();
        self.emit(ConnectionEvent::Connected);

        let (mut ws_sink, mut ws_source) = ws_stream.split();
        let mut outbox_open = true;

        'main_loop: loop {
            tokio::select! {
                outgoing = self.outbox_source.next(), if outbox_open => {
                    let msg = match outgoing {
                        Some(msg) => msg,
                        None => {
                            // every handle is gone, say goodbye and wait for the reply
                            outbox_open = false;
                            self.set_state(ConnectionState::Closing);
                            Message::Close(None)
                        }
                    };
                    if msg.is_close() {
                        outbox_open = false;
                    }
                    ws_sink
                        .send(msg)
                        .await
                        .map_err(|e| anyhow!("Failed to send frame: {e}"))?;
                }

                incoming = ws_source.next() => {
                    match incoming {
                        None => break 'main_loop,
                        Some(Ok(Message::Close(frame))) => {
                            log::info!("[{}] Backend closed the connection: {frame:?}", self.id);
                            break 'main_loop;
                        }
                        Some(Ok(msg)) => {
                            if let Some(event) = event_for_frame(&self.id, msg) {
                                self.emit(event);
                            }
                        }
                        Some(Err(WsError::ConnectionClosed | WsError::AlreadyClosed)) => {
                            break 'main_loop;
                        }
                        Some(Err(e)) => {
                            return Err(anyhow!("Invalid protocol, ending connection. Error: {e}"));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Turn one inbound frame into an event. Corrupt frames are logged and dropped.
pub fn event_for_frame(connection_id: &str, msg: Message) -> Option<ConnectionEvent> {
    match msg {
        Message::Binary(data) => {
            log::debug!("[{connection_id}] Received {} bytes", data.len());
            match decode_authorization(&data) {
                Ok(auth) => Some(ConnectionEvent::Authorized(auth)),
                Err(DecodeError::UnknownActionType(unknown)) => {
                    log::warn!(
                        "[{connection_id}] Unknown action type {}, rendering fallback",
                        unknown.action_type
                    );
                    Some(ConnectionEvent::Unrecognized(unknown))
                }
                Err(DecodeError::Malformed(e)) => {
                    log::error!(
                        "[{connection_id}] Received a corrupt binary message ({} bytes): {e}",
                        data.len()
                    );
                    None
                }
            }
        }
        Message::Text(text) => {
            log::info!("[{connection_id}] Ignoring text message: {text}");
            None
        }
        _ => None,
    }
}
