// file: src/models/mod.rs

pub mod component;
pub mod event;
pub mod reference;
pub mod settings;

// Flattened so callers can write `use kirchenjahr::models::ChurchEvent`.
pub use component::{
    BibleText, BibleVerse, ComponentCategory, ComponentType, MoveDirection, ServiceComponent,
    ServicePlan,
};
pub use event::ChurchEvent;
pub use reference::ParsedReference;
pub use settings::Settings;
