use gpui::Entity;

pub mod counter_entity;
pub mod leveling_entity;
pub mod settings_entity;

/// Handles to the shared UI state entities, passed down to every view.
#[derive(Debug, Clone)]
pub struct DataEntities {
    pub leveling: Entity<leveling_entity::LevelingEntity>,
    pub counter: Entity<counter_entity::CounterEntity>,
    pub settings: Entity<settings_entity::SettingsEntity>,
}
