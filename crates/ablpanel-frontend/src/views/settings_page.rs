use gpui::{
    Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    group_box::{GroupBox, GroupBoxVariants},
};

use crate::{
    components::info_row::InfoRow, entities::DataEntities, formatting::mask_api_key,
};

pub struct SettingsPage {
    data: DataEntities,
}

impl SettingsPage {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.settings, |_, _, cx| cx.notify()).detach();
        Self { data: data.clone() }
    }
}

impl Render for SettingsPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let config = {
            let settings_state = self.data.settings.read(cx);
            settings_state.config.clone()
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("OctoPrint server").text_xl().font_bold())
                    .child(
                        InfoRow::new("Address")
                            .value(div().child(SharedString::from(config.server.base_url.clone()))),
                    )
                    .child(
                        InfoRow::new("API key").value(
                            div().child(SharedString::from(mask_api_key(&config.server.api_key))),
                        ),
                    )
                    .child(InfoRow::new("Plugin").value(div().child("SmartABL"))),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Edit config.toml in the ablpanel config directory and restart to change the connection."),
            )
    }
}
