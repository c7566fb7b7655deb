//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the graphical
//! panel with an asynchronous backend responsible for talking to an
//! OctoPrint instance running the SmartABL plugin.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., switch the leveling mode, request
//!   the configuration).
//! - The backend pushes events (e.g., mode updates reported by the server,
//!   probe-counter progress, notifications).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod leveling;
pub mod notification;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or to relay
/// asynchronous push messages received from the OctoPrint server.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// The server reported the active bed-leveling mode.
    LevelingModeUpdate(leveling::LevelingMode),
    /// The server reported progress of the restricted-mode print counter.
    ProbeCounterUpdate {
        /// Prints completed since the last leveling run.
        current: u32,
        /// Number of prints after which leveling is forced again.
        total: u32,
    },
}

/// Commands issued by the frontend to control or query the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request to switch the bed-leveling mode on the server.
    SetLevelingMode(leveling::LevelingMode),
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
