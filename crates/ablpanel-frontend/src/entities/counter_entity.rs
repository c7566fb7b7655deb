use gpui::{AppContext, Entity};

/// Progress of the restricted-mode print counter, as last reported by the
/// server. Each update overwrites the previous value.
#[derive(Debug, Clone, Default)]
pub struct CounterEntity {
    pub counter: Option<(u32, u32)>,
}

impl CounterEntity {
    pub fn update<C: AppContext>(entity: &Entity<Self>, current: u32, total: u32, cx: &mut C) {
        entity.update(cx, |this, cx| {
            this.counter = Some((current, total));
            cx.notify();
        });
    }
}
