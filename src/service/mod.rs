// Service planning: component catalog, durations, run-sheet editing

pub mod catalog;
pub mod celebration;
pub mod duration;
pub mod ordering;
pub mod share;

pub use catalog::{component_config, components_by_category, ComponentTypeConfig};
pub use celebration::{format_elapsed, Celebration};
pub use duration::{
    auto_duration_minutes, effective_duration_minutes, estimate_duration_minutes,
    format_duration, format_precise_duration, summarize, total_duration_minutes,
    DurationSummary,
};
pub use ordering::{
    add_component, move_component, remove_component, reorder, set_manual_duration,
    update_component_content,
};
pub use share::{musician_list, sexton_list};
