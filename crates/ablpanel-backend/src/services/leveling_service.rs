use ablpanel_bridge::{leveling::LevelingMode, notification::NotificationType};
use serde::Serialize;

use super::SMARTABL_PLUGIN_ID;

/// Body of the SmartABL mode command, as expected by the plugin API:
/// `{"command": "abl_always", "value": <bool>}`.
#[derive(Debug, Serialize)]
struct AblAlwaysCommand {
    command: &'static str,
    value: bool,
}

impl AblAlwaysCommand {
    fn new(mode: LevelingMode) -> Self {
        Self {
            command: "abl_always",
            value: mode.as_always(),
        }
    }
}

/// Handles an incoming mode switch request (see
/// [`ablpanel_bridge::MessageToBackend::SetLevelingMode`]).
///
/// The frontend has already updated optimistically; a failed request does not
/// roll it back, but it is logged and surfaced as an error notification.
pub async fn handle_set_leveling_mode(context: super::AppContextHandle, mode: LevelingMode) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    let command = AblAlwaysCommand::new(mode);
    log::debug!("Sending mode command: {command:?}");
    if let Err(e) = api.plugin_command(SMARTABL_PLUGIN_ID, &command).await {
        log::error!("Failed to switch leveling mode to {mode:?}: {e}");
        context
            .send_notification(NotificationType::Error, "SmartABL", e.to_string())
            .await;
    }
}

#[cfg(test)]
mod tests {
    use ablpanel_bridge::leveling::LevelingMode;
    use serde_json::json;

    use super::AblAlwaysCommand;

    #[test]
    fn restricted_serializes_to_a_false_value() {
        let body = serde_json::to_value(AblAlwaysCommand::new(LevelingMode::Restricted)).unwrap();
        assert_eq!(body, json!({"command": "abl_always", "value": false}));
    }

    #[test]
    fn always_serializes_to_a_true_value() {
        let body = serde_json::to_value(AblAlwaysCommand::new(LevelingMode::Always)).unwrap();
        assert_eq!(body, json!({"command": "abl_always", "value": true}));
    }
}
