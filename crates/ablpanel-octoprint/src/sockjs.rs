//! Minimal SockJS frame parsing.
//!
//! OctoPrint exposes its push channel through SockJS. On the raw websocket
//! endpoint (`/sockjs/websocket`) every text frame starts with a one-letter
//! type marker, optionally followed by a JSON payload:
//!
//! - `o` — connection opened.
//! - `h` — heartbeat.
//! - `c[code, "reason"]` — connection closed by the server.
//! - `a["...", ...]` — array of JSON-encoded messages.
//! - `m"..."` — a single JSON-encoded message.

use thiserror::Error;

/// A single decoded SockJS frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Open frame, sent once after the websocket handshake.
    Open,
    /// Heartbeat frame, keeps the connection alive.
    Heartbeat,
    /// Close frame with the server-provided status code and reason.
    Close { code: i64, reason: String },
    /// One or more JSON-encoded server messages.
    Messages(Vec<String>),
}

/// Errors produced while decoding a SockJS frame.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The frame type marker is not one of the known SockJS markers.
    #[error("unrecognized frame: {0:?}")]
    UnrecognizedFrame(String),
    /// The frame payload is not valid JSON of the expected shape.
    #[error("malformed frame payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Parses a raw websocket text frame into a [`Frame`].
pub fn parse_frame(raw: &str) -> Result<Frame, FrameError> {
    match raw.split_at_checked(1) {
        Some(("o", "")) => Ok(Frame::Open),
        Some(("h", "")) => Ok(Frame::Heartbeat),
        Some(("c", payload)) => {
            let (code, reason): (i64, String) = serde_json::from_str(payload)?;
            Ok(Frame::Close { code, reason })
        }
        Some(("a", payload)) => {
            let messages: Vec<String> = serde_json::from_str(payload)?;
            Ok(Frame::Messages(messages))
        }
        Some(("m", payload)) => {
            let message: String = serde_json::from_str(payload)?;
            Ok(Frame::Messages(vec![message]))
        }
        _ => Err(FrameError::UnrecognizedFrame(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, FrameError, parse_frame};

    #[test]
    fn open_and_heartbeat() {
        assert_eq!(parse_frame("o").unwrap(), Frame::Open);
        assert_eq!(parse_frame("h").unwrap(), Frame::Heartbeat);
    }

    #[test]
    fn close_frame() {
        assert_eq!(
            parse_frame("c[3000,\"Go away!\"]").unwrap(),
            Frame::Close {
                code: 3000,
                reason: "Go away!".to_owned(),
            }
        );
    }

    #[test]
    fn array_frame_keeps_message_order() {
        let frame = parse_frame(r#"a["{\"a\":1}","{\"b\":2}"]"#).unwrap();
        assert_eq!(
            frame,
            Frame::Messages(vec!["{\"a\":1}".to_owned(), "{\"b\":2}".to_owned()])
        );
    }

    #[test]
    fn single_message_frame() {
        let frame = parse_frame(r#"m"{\"a\":1}""#).unwrap();
        assert_eq!(frame, Frame::Messages(vec!["{\"a\":1}".to_owned()]));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            parse_frame("x"),
            Err(FrameError::UnrecognizedFrame(_))
        ));
        assert!(matches!(parse_frame(""), Err(FrameError::UnrecognizedFrame(_))));
        assert!(matches!(
            parse_frame("a{not json}"),
            Err(FrameError::MalformedPayload(_))
        ));
    }
}
