use gpui::{IntoElement, ParentElement, SharedString, Styled, div, prelude::FluentBuilder};
use gpui_component::StyledExt;

/// A labeled row used on the settings page: label on the left, value on the
/// right.
#[derive(Default, IntoElement)]
pub struct InfoRow {
    label: SharedString,
    value: Option<gpui::AnyElement>,
}

impl InfoRow {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    pub fn value(mut self, value: impl IntoElement) -> Self {
        self.value = Some(value.into_any_element());
        self
    }
}

impl gpui::RenderOnce for InfoRow {
    fn render(self, _: &mut gpui::Window, _: &mut gpui::App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(div().child(self.label).font_semibold())
            .when(self.value.is_some(), |this| this.child(self.value.unwrap()))
    }
}
