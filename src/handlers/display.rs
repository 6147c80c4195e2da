use crate::{
    domain::notification::{NotificationLine, Tone, STATUS_CLOSED, STATUS_CONNECTED, STATUS_ERROR},
    services::connection::{ConnectionEvent, ConnectionState},
};

const RESET: &str = "\x1b[0m";

fn colour(tone: Tone) -> Option<&'static str> {
    match tone {
        Tone::Join => Some("\x1b[32m"),
        Tone::Leave => Some("\x1b[31m"),
        Tone::Action => Some("\x1b[34m"),
        Tone::Plain => None,
    }
}

fn paint(line: &NotificationLine, ansi: bool) -> String {
    match colour(line.tone) {
        Some(code) if ansi => format!("{code}{line}{RESET}"),
        _ => line.to_string(),
    }
}

/// Printable text for an event.
pub fn render_event(event: &ConnectionEvent, ansi: bool) -> String {
    match event {
        ConnectionEvent::Connected => STATUS_CONNECTED.to_string(),
        ConnectionEvent::Closed => STATUS_CLOSED.to_string(),
        ConnectionEvent::Error(e) => {
            log::debug!("Socket error: {e}");
            STATUS_ERROR.to_string()
        }
        ConnectionEvent::Authorized(auth) => {
            paint(&NotificationLine::from_authorization(auth), ansi)
        }
        ConnectionEvent::Unrecognized(unknown) => {
            paint(&NotificationLine::from_unknown(unknown), ansi)
        }
    }
}

pub fn render_rejection(state: ConnectionState) -> String {
    format!("Request not sent, connection is {state:?}")
}
