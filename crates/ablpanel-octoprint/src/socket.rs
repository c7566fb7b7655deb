//! Push-socket client for OctoPrint's live update channel.

use std::collections::VecDeque;

use futures_util::StreamExt;
use serde_json::Value;
use thiserror::Error;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite,
    tungstenite::Message,
};

use crate::sockjs::{self, Frame};

/// A server message relevant to a push-channel consumer.
///
/// OctoPrint pushes many message kinds (`current`, `history`, `event`, ...);
/// only the handshake and plugin messages matter here, everything else is
/// reported as [`ServerMessage::Other`] so callers can ignore it.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    /// Handshake message sent right after the socket opens.
    Connected {
        /// OctoPrint version string, when the server reports one.
        version: Option<String>,
    },
    /// A plugin broadcast: `{"plugin": {"plugin": <id>, "data": <payload>}}`.
    Plugin {
        /// Identifier of the plugin that sent the message.
        plugin: String,
        /// Opaque plugin-defined payload.
        data: Value,
    },
    /// Any other message kind, carried only for logging.
    Other,
}

impl ServerMessage {
    /// Decodes a single push-channel message object.
    ///
    /// Returns `None` when the message is not a JSON object at all.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if let Some(connected) = object.get("connected") {
            let version = connected
                .get("version")
                .and_then(Value::as_str)
                .map(str::to_owned);
            return Some(ServerMessage::Connected { version });
        }
        if let Some(envelope) = object.get("plugin") {
            let plugin = envelope.get("plugin")?.as_str()?.to_owned();
            let data = envelope.get("data")?.clone();
            return Some(ServerMessage::Plugin { plugin, data });
        }
        Some(ServerMessage::Other)
    }
}

/// Errors produced while connecting to or reading from the push socket.
#[derive(Debug, Error)]
pub enum SocketError {
    /// The configured base URL does not use a scheme the socket understands.
    #[error("base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
    /// The websocket handshake or transport failed.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),
}

/// Rewrites the HTTP base URL into the raw-websocket SockJS endpoint.
fn push_socket_url(base_url: &str) -> Result<String, SocketError> {
    let ws_base = if let Some(rest) = base_url.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base_url.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        return Err(SocketError::UnsupportedScheme(base_url.to_owned()));
    };
    Ok(format!(
        "{}/sockjs/websocket",
        ws_base.trim_end_matches('/')
    ))
}

/// Outcome of decoding one websocket text frame.
#[derive(Debug, PartialEq)]
enum DecodedFrame {
    /// Control traffic (open, heartbeat), nothing to deliver.
    Control,
    /// The server closed the session.
    Closed,
    /// Zero or more decoded server messages.
    Messages(Vec<ServerMessage>),
}

/// Decodes one websocket text frame into server messages.
///
/// The framed session transport (`/sockjs/<server>/<session>/websocket`)
/// wraps messages in SockJS frames, while the raw transport
/// (`/sockjs/websocket`, used here) delivers bare message text. Both are
/// accepted: anything that is not a SockJS frame is treated as a bare
/// message.
fn decode_text_frame(raw: &str) -> DecodedFrame {
    let raw_messages = match sockjs::parse_frame(raw) {
        Ok(Frame::Open) => {
            log::debug!("Push socket opened");
            return DecodedFrame::Control;
        }
        Ok(Frame::Heartbeat) => return DecodedFrame::Control,
        Ok(Frame::Close { code, reason }) => {
            log::info!("Push socket closed by server: {code} {reason}");
            return DecodedFrame::Closed;
        }
        Ok(Frame::Messages(messages)) => messages,
        Err(sockjs::FrameError::UnrecognizedFrame(_)) => vec![raw.to_owned()],
        Err(e) => {
            log::warn!("Skipping malformed SockJS frame: {e}");
            return DecodedFrame::Control;
        }
    };

    let mut decoded = Vec::new();
    for raw in raw_messages {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => match ServerMessage::from_json(&value) {
                Some(message) => decoded.push(message),
                None => log::warn!("Non-object push message: {raw}"),
            },
            Err(e) => log::warn!("Undecodable push message: {e}"),
        }
    }
    DecodedFrame::Messages(decoded)
}

/// A connected push socket yielding decoded [`ServerMessage`]s.
pub struct PushSocket {
    stream: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
    pending: VecDeque<ServerMessage>,
}

impl PushSocket {
    /// Connects to the push channel of the OctoPrint instance at `base_url`.
    pub async fn connect(base_url: &str) -> Result<Self, SocketError> {
        let url = push_socket_url(base_url)?;
        log::info!("Connecting to push socket at {url}");
        let (stream, _) = connect_async(&url).await?;
        Ok(Self {
            stream,
            pending: VecDeque::new(),
        })
    }

    /// Returns the next server message, or `None` once the socket closed.
    ///
    /// SockJS control frames (open, heartbeat) are consumed transparently;
    /// malformed frames are logged and skipped.
    pub async fn next_message(&mut self) -> Option<ServerMessage> {
        loop {
            if let Some(message) = self.pending.pop_front() {
                return Some(message);
            }

            let frame = match self.stream.next().await? {
                Ok(Message::Text(text)) => text,
                Ok(Message::Close(_)) => return None,
                // Ping/pong handled by tungstenite, binary never used.
                Ok(_) => continue,
                Err(e) => {
                    log::error!("Push socket transport error: {e}");
                    return None;
                }
            };

            match decode_text_frame(&frame) {
                DecodedFrame::Control => {}
                DecodedFrame::Closed => return None,
                DecodedFrame::Messages(messages) => self.pending.extend(messages),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{DecodedFrame, ServerMessage, SocketError, decode_text_frame, push_socket_url};

    #[test]
    fn socket_url_rewrites_scheme() {
        assert_eq!(
            push_socket_url("http://octopi.local").unwrap(),
            "ws://octopi.local/sockjs/websocket"
        );
        assert_eq!(
            push_socket_url("https://octopi.local/").unwrap(),
            "wss://octopi.local/sockjs/websocket"
        );
        assert!(matches!(
            push_socket_url("ftp://octopi.local"),
            Err(SocketError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn decodes_connected_handshake() {
        let value = json!({"connected": {"version": "1.9.3", "apikey": null}});
        assert_eq!(
            ServerMessage::from_json(&value),
            Some(ServerMessage::Connected {
                version: Some("1.9.3".to_owned()),
            })
        );
    }

    #[test]
    fn decodes_plugin_broadcast() {
        let value = json!({"plugin": {"plugin": "SmartABL", "data": {"abl_always": true}}});
        assert_eq!(
            ServerMessage::from_json(&value),
            Some(ServerMessage::Plugin {
                plugin: "SmartABL".to_owned(),
                data: json!({"abl_always": true}),
            })
        );
    }

    #[test]
    fn bare_frames_from_the_raw_transport_are_accepted() {
        // The raw `/sockjs/websocket` transport delivers messages without
        // SockJS framing.
        let frame = r#"{"plugin": {"plugin": "SmartABL", "data": {"abl_always": false}}}"#;
        assert_eq!(
            decode_text_frame(frame),
            DecodedFrame::Messages(vec![ServerMessage::Plugin {
                plugin: "SmartABL".to_owned(),
                data: json!({"abl_always": false}),
            }])
        );
        assert_eq!(
            decode_text_frame(r#"{"connected": {"version": "1.9.3"}}"#),
            DecodedFrame::Messages(vec![ServerMessage::Connected {
                version: Some("1.9.3".to_owned()),
            }])
        );
    }

    #[test]
    fn framed_session_transport_is_still_understood() {
        let frame = r#"a["{\"plugin\": {\"plugin\": \"SmartABL\", \"data\": {\"abl_counter\": [3, 10]}}}"]"#;
        assert_eq!(
            decode_text_frame(frame),
            DecodedFrame::Messages(vec![ServerMessage::Plugin {
                plugin: "SmartABL".to_owned(),
                data: json!({"abl_counter": [3, 10]}),
            }])
        );
        assert_eq!(decode_text_frame("h"), DecodedFrame::Control);
        assert_eq!(decode_text_frame("o"), DecodedFrame::Control);
        assert_eq!(
            decode_text_frame("c[3000,\"Go away!\"]"),
            DecodedFrame::Closed
        );
    }

    #[test]
    fn undecodable_frames_deliver_nothing() {
        assert_eq!(
            decode_text_frame("not json at all"),
            DecodedFrame::Messages(vec![])
        );
    }

    #[test]
    fn unrelated_messages_map_to_other() {
        let value = json!({"current": {"state": {}}});
        assert_eq!(ServerMessage::from_json(&value), Some(ServerMessage::Other));
        assert_eq!(ServerMessage::from_json(&json!([1, 2])), None);
    }
}
