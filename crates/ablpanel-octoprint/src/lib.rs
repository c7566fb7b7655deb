//! OctoPrint protocol layer.
//!
//! This crate knows how to talk to an OctoPrint instance, nothing more:
//! - [`api`] issues plugin commands over the REST API.
//! - [`socket`] subscribes to the server's push channel and yields parsed
//!   server messages.
//! - [`sockjs`] implements the small subset of SockJS framing OctoPrint
//!   uses on its raw websocket endpoint.
//!
//! It has no knowledge of any specific plugin; interpreting plugin payloads
//! is left to the caller.

pub mod api;
pub mod socket;
pub mod sockjs;
