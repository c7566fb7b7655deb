use ablpanel_bridge::{MessageFromBackend, leveling::LevelingMode};
use gpui::{AppContext, Application, Global, WindowOptions};
use gpui_component::{
    Root, WindowExt,
    notification::{Notification, NotificationType},
};
use tokio::sync::mpsc;

use crate::entities::{
    counter_entity::CounterEntity, leveling_entity::LevelingEntity,
    settings_entity::SettingsEntity,
};

pub mod components;
pub mod entities;
pub mod formatting;
mod views;

#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<ablpanel_bridge::MessageToBackend>,
}

impl BackendBridge {
    pub async fn request_config(&self) {
        self.to_backend
            .send(ablpanel_bridge::MessageToBackend::ConfigurationRequest)
            .await
            .expect("failed to request config");
    }

    pub async fn set_leveling_mode(&self, mode: LevelingMode) {
        self.to_backend
            .send(ablpanel_bridge::MessageToBackend::SetLevelingMode(mode))
            .await
            .expect("failed to request mode switch");
    }
}

impl Global for BackendBridge {}

pub fn run(
    mut rx: mpsc::Receiver<ablpanel_bridge::MessageFromBackend>,
    tx: mpsc::Sender<ablpanel_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let leveling = cx.new(|_| LevelingEntity::default());
        let counter = cx.new(|_| CounterEntity::default());
        let settings = cx.new(|_| SettingsEntity::default());

        let data = entities::DataEntities {
            leveling,
            counter,
            settings,
        };
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());
        let listener_bridge = bridge.clone();

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                let window_handle = window.window_handle();
                cx.spawn(async move |cx| {
                    while let Some(message) = rx.recv().await {
                        println!("Got a message from backend: {message:?}");
                        match message {
                            MessageFromBackend::ConfigurationResponse(config) => {
                                SettingsEntity::update(&listener_data.settings, config, cx)
                            }
                            MessageFromBackend::LevelingModeUpdate(mode) => {
                                // Mirror of a user click: update the entity and
                                // re-announce the mode to the server.
                                LevelingEntity::select(&listener_data.leveling, mode, cx);
                                listener_bridge.set_leveling_mode(mode).await;
                            }
                            MessageFromBackend::ProbeCounterUpdate { current, total } => {
                                CounterEntity::update(
                                    &listener_data.counter,
                                    current,
                                    total,
                                    cx,
                                )
                            }
                            MessageFromBackend::NotificationMessage(notification) => {
                                let _notification_type = match notification.notification_type {
                                    ablpanel_bridge::notification::NotificationType::Info => {
                                        NotificationType::Info
                                    }
                                    ablpanel_bridge::notification::NotificationType::Success => {
                                        NotificationType::Success
                                    }
                                    ablpanel_bridge::notification::NotificationType::Warning => {
                                        NotificationType::Warning
                                    }
                                    ablpanel_bridge::notification::NotificationType::Error => {
                                        NotificationType::Error
                                    }
                                };
                                window_handle
                                    .update(cx, |_, window, cx| {
                                        let _notification = Notification::new()
                                            .message(format!(
                                                "{}: {}",
                                                notification.title, notification.body
                                            ))
                                            .with_type(_notification_type);
                                        window.push_notification(_notification, cx);
                                    })
                                    .expect("failed to push a new notification");
                            }
                        }
                    }
                })
                .detach();

                cx.spawn(async move |_| {
                    bridge.request_config().await;
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
