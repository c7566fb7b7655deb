//! Push-channel listener: relays SmartABL server messages to the frontend.

use ablpanel_bridge::{
    MessageFromBackend,
    leveling::LevelingMode,
    notification::{NotificationMessage, NotificationType},
};
use ablpanel_octoprint::socket::{PushSocket, ServerMessage};
use serde_json::Value;

use super::SMARTABL_PLUGIN_ID;

/// Decodes a SmartABL plugin payload into a bridge message.
///
/// The three payload variants are checked in a fixed order (`abl_always`,
/// then `abl_counter`, then `abl_notify`); the first matching key wins.
/// Payloads carrying none of them, or a matching key with a malformed value,
/// are rejected with `None`.
fn decode_plugin_payload(data: &Value) -> Option<MessageFromBackend> {
    if let Some(always) = data.get("abl_always") {
        let mode = LevelingMode::from_always(always.as_bool()?);
        return Some(MessageFromBackend::LevelingModeUpdate(mode));
    }
    if let Some(counter) = data.get("abl_counter") {
        let pair = counter.as_array()?;
        let current = u32::try_from(pair.first()?.as_u64()?).ok()?;
        let total = u32::try_from(pair.get(1)?.as_u64()?).ok()?;
        return Some(MessageFromBackend::ProbeCounterUpdate { current, total });
    }
    if let Some(notify) = data.get("abl_notify") {
        let pair = notify.as_array()?;
        return Some(MessageFromBackend::NotificationMessage(
            NotificationMessage {
                notification_type: NotificationType::Error,
                title: pair.first()?.as_str()?.to_owned(),
                body: pair.get(1)?.as_str()?.to_owned(),
            },
        ));
    }
    None
}

/// Turns a tagged plugin broadcast into a bridge message.
///
/// Broadcasts tagged for any other plugin produce no message at all;
/// SmartABL broadcasts with an unrecognized payload are dropped with a
/// warning.
fn smartabl_update(plugin: &str, data: &Value) -> Option<MessageFromBackend> {
    if plugin != SMARTABL_PLUGIN_ID {
        log::debug!("Ignoring push message for plugin {plugin}");
        return None;
    }
    let update = decode_plugin_payload(data);
    if update.is_none() {
        log::warn!("Unrecognized SmartABL payload: {data}");
    }
    update
}

/// Connects to the push channel and forwards SmartABL updates until the
/// socket closes.
///
/// A failed connection is surfaced once and the listener gives up; the panel
/// stays usable for outbound commands without live updates.
pub async fn run_push_listener(context: super::AppContextHandle) {
    let base_url = {
        let state = context.state.read().await;
        state.config.server.base_url.clone()
    };

    let mut socket = match PushSocket::connect(&base_url).await {
        Ok(socket) => socket,
        Err(e) => {
            log::error!("Failed to connect to the push channel: {e}");
            context
                .send_notification(
                    NotificationType::Error,
                    "OctoPrint",
                    format!("No live updates, connection failed: {e}"),
                )
                .await;
            return;
        }
    };

    while let Some(message) = socket.next_message().await {
        match message {
            ServerMessage::Connected { version } => {
                log::info!("Connected to OctoPrint {}", version.as_deref().unwrap_or("?"));
                context
                    .send_notification(
                        NotificationType::Info,
                        "OctoPrint",
                        "Live updates connected",
                    )
                    .await;
            }
            ServerMessage::Plugin { plugin, data } => {
                if let Some(update) = smartabl_update(&plugin, &data) {
                    context.send(update).await;
                }
            }
            ServerMessage::Other => {}
        }
    }

    log::info!("Push channel closed");
}

#[cfg(test)]
mod tests {
    use ablpanel_bridge::{
        MessageFromBackend, leveling::LevelingMode, notification::NotificationType,
    };
    use serde_json::json;

    use super::{decode_plugin_payload, smartabl_update};

    #[test]
    fn mode_update_decodes_both_directions() {
        assert!(matches!(
            decode_plugin_payload(&json!({"abl_always": true})),
            Some(MessageFromBackend::LevelingModeUpdate(LevelingMode::Always))
        ));
        assert!(matches!(
            decode_plugin_payload(&json!({"abl_always": false})),
            Some(MessageFromBackend::LevelingModeUpdate(
                LevelingMode::Restricted
            ))
        ));
    }

    #[test]
    fn counter_update_keeps_current_and_total() {
        assert!(matches!(
            decode_plugin_payload(&json!({"abl_counter": [3, 10]})),
            Some(MessageFromBackend::ProbeCounterUpdate {
                current: 3,
                total: 10,
            })
        ));
    }

    #[test]
    fn notify_decodes_to_an_error_notification() {
        let message = decode_plugin_payload(&json!({
            "abl_notify": ["Error", "Leveling failed"]
        }));
        let Some(MessageFromBackend::NotificationMessage(notification)) = message else {
            panic!("expected a notification, got {message:?}");
        };
        assert!(matches!(
            notification.notification_type,
            NotificationType::Error
        ));
        assert_eq!(notification.title, "Error");
        assert_eq!(notification.body, "Leveling failed");
    }

    #[test]
    fn first_matching_key_wins() {
        let message = decode_plugin_payload(&json!({
            "abl_always": true,
            "abl_counter": [1, 2],
            "abl_notify": ["a", "b"],
        }));
        assert!(matches!(
            message,
            Some(MessageFromBackend::LevelingModeUpdate(LevelingMode::Always))
        ));
    }

    #[test]
    fn broadcasts_for_other_plugins_are_dropped() {
        let payload = json!({"abl_always": true});
        assert!(smartabl_update("DisplayLayerProgress", &payload).is_none());
        assert!(smartabl_update("smartabl", &payload).is_none());
        assert!(matches!(
            smartabl_update("SmartABL", &payload),
            Some(MessageFromBackend::LevelingModeUpdate(LevelingMode::Always))
        ));
    }

    #[test]
    fn unknown_and_malformed_payloads_are_rejected() {
        assert!(decode_plugin_payload(&json!({})).is_none());
        assert!(decode_plugin_payload(&json!({"something": 1})).is_none());
        assert!(decode_plugin_payload(&json!({"abl_always": "yes"})).is_none());
        assert!(decode_plugin_payload(&json!({"abl_counter": [3]})).is_none());
        assert!(decode_plugin_payload(&json!({"abl_notify": ["only title"]})).is_none());
    }
}
