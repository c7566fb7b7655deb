use ablpanel_bridge::leveling::LevelingMode;
use gpui::{AppContext, Entity};

/// Explicit holder of the active bed-leveling mode.
///
/// The panel buttons render as a pure projection of this field; the field is
/// the single source of truth, not the button styling.
#[derive(Debug, Clone, Default)]
pub struct LevelingEntity {
    /// Active mode as last selected or reported; `None` until first known.
    pub mode: Option<LevelingMode>,
}

impl LevelingEntity {
    pub fn select<C: AppContext>(entity: &Entity<Self>, mode: LevelingMode, cx: &mut C) {
        entity.update(cx, |this, cx| {
            this.mode = Some(mode);
            cx.notify();
        });
    }
}
