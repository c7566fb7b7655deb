use ablpanel_bridge::leveling::LevelingMode;
use gpui::{
    Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Disableable, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::{
    BackendBridge, entities::DataEntities, entities::leveling_entity::LevelingEntity,
    formatting::format_probe_counter,
};

/// The toggle control: two radio-style mode buttons with the probe counter
/// between them.
pub struct PanelPage {
    data: DataEntities,
}

impl PanelPage {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.leveling, |_, _, cx| cx.notify()).detach();
        cx.observe(&data.counter, |_, _, cx| cx.notify()).detach();
        Self { data: data.clone() }
    }

    /// Applies a mode selection: updates the entity (the buttons re-render
    /// from it) and announces the new mode to the server. Server-pushed mode
    /// updates go through this same path, mirroring a user click.
    fn select_mode(&mut self, mode: LevelingMode, cx: &mut Context<Self>) {
        LevelingEntity::select(&self.data.leveling, mode, cx);
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.set_leveling_mode(mode).await;
        })
        .detach();
    }
}

impl Render for PanelPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mode = self.data.leveling.read(cx).mode;
        let counter = self.data.counter.read(cx).counter;

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().child("Bed leveling").text_2xl().font_bold())
            .child(
                div()
                    .flex()
                    .gap_3()
                    .child(
                        Button::new("abl_restricted")
                            .label(LevelingMode::Restricted.label())
                            .when(mode == Some(LevelingMode::Restricted), |this| this.primary())
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.select_mode(LevelingMode::Restricted, cx);
                            })),
                    )
                    .child(
                        Button::new("abl_counter")
                            .label(format_probe_counter(counter))
                            .disabled(true),
                    )
                    .child(
                        Button::new("abl_always")
                            .label(LevelingMode::Always.label())
                            .when(mode == Some(LevelingMode::Always), |this| this.primary())
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.select_mode(LevelingMode::Always, cx);
                            })),
                    ),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Restricted levels the bed only when due; Always levels before every print."),
            )
    }
}
