//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and notifications back to the frontend bridge.

use std::sync::Arc;

use ablpanel_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::SetLevelingMode(mode) => {
                services::leveling_service::handle_set_leveling_mode(self.clone(), mode).await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        self.tx
            .send(message)
            .await
            .expect("failed to send message to frontend");
    }

    /// Send a notification message to the frontend bridge.
    pub async fn send_notification(
        &self,
        notification_type: ablpanel_bridge::notification::NotificationType,
        title: impl Into<String>,
        body: impl Into<String>,
    ) {
        self.send(MessageFromBackend::NotificationMessage(
            ablpanel_bridge::notification::NotificationMessage {
                notification_type,
                title: title.into(),
                body: body.into(),
            },
        ))
        .await;
    }
}
