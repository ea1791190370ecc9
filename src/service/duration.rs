// Spoken-duration estimates for service components

use crate::models::{ComponentType, ServiceComponent};
use crate::service::catalog::{component_config, is_reading};
use crate::utils::word_count;
use serde::Serialize;

/// Whole minutes needed to speak `text`, rounded up. Empty text takes 0.
pub fn estimate_duration_minutes(text: &str, words_per_minute: u32) -> u32 {
    let words = word_count(text) as u32;
    if words == 0 {
        return 0;
    }
    words.div_ceil(words_per_minute.max(1))
}

fn seconds_for_words(words: usize, words_per_minute: u32) -> u32 {
    (words as f64 / words_per_minute.max(1) as f64 * 60.0).round() as u32
}

pub fn estimate_duration_seconds(text: &str, words_per_minute: u32) -> u32 {
    seconds_for_words(word_count(text), words_per_minute)
}

/// `m:ss`, e.g. `2:05`.
pub fn format_seconds(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn format_precise_duration(text: &str, words_per_minute: u32) -> String {
    format_seconds(estimate_duration_seconds(text, words_per_minute))
}

pub fn format_duration(minutes: u32) -> String {
    format!("{} Min", minutes)
}

/// Duration the editor would compute on its own: from the text for types
/// that carry text, otherwise the type's default.
pub fn auto_duration_minutes(component: &ServiceComponent, words_per_minute: u32) -> u32 {
    let config = component_config(component.component_type);
    match component.text() {
        Some(text) if config.has_text => estimate_duration_minutes(text, words_per_minute),
        _ => config.default_duration_minutes,
    }
}

/// A stored duration counts as a manual override only while it differs from
/// what the current content would produce. A stored 0 means unset.
pub fn is_manual_duration(component: &ServiceComponent, words_per_minute: u32) -> bool {
    match component.duration_minutes {
        Some(minutes) if minutes > 0 => minutes != auto_duration_minutes(component, words_per_minute),
        _ => false,
    }
}

pub fn effective_duration_minutes(component: &ServiceComponent, words_per_minute: u32) -> u32 {
    match component.duration_minutes {
        Some(minutes) if minutes > 0 => minutes,
        _ => auto_duration_minutes(component, words_per_minute),
    }
}

/// Replaces the content and recomputes the duration unless the user had
/// set it by hand.
pub fn with_content(
    component: &ServiceComponent,
    content: Option<String>,
    words_per_minute: u32,
) -> ServiceComponent {
    let manual = is_manual_duration(component, words_per_minute);
    let mut updated = ServiceComponent {
        content,
        ..component.clone()
    };
    if !manual {
        updated.duration_minutes = Some(auto_duration_minutes(&updated, words_per_minute));
    }
    updated
}

/// Sub-minute estimate from spoken text and attached scripture only.
/// Components timed purely by hand (hymns, defaults) contribute nothing.
pub fn calculated_duration_seconds(component: &ServiceComponent, words_per_minute: u32) -> u32 {
    let config = component_config(component.component_type);
    let text_seconds = component
        .text()
        .map(|t| estimate_duration_seconds(t, words_per_minute))
        .unwrap_or(0);
    let scripture_seconds = component
        .bible_text
        .as_ref()
        .map(|b| seconds_for_words(b.word_count(), words_per_minute))
        .unwrap_or(0);

    if component.component_type == ComponentType::Predigt {
        text_seconds + scripture_seconds
    } else if config.has_text && text_seconds > 0 {
        text_seconds
    } else if is_reading(component.component_type) {
        scripture_seconds
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationSummary {
    /// Sum of effective durations, manual values included.
    pub total_minutes: u32,
    /// Sum of text and scripture estimates only.
    pub calculated_seconds: u32,
}

impl DurationSummary {
    pub fn calculated_display(&self) -> String {
        format_seconds(self.calculated_seconds)
    }
}

pub fn total_duration_minutes(components: &[ServiceComponent], words_per_minute: u32) -> u32 {
    components
        .iter()
        .map(|c| effective_duration_minutes(c, words_per_minute))
        .sum()
}

pub fn summarize(components: &[ServiceComponent], words_per_minute: u32) -> DurationSummary {
    DurationSummary {
        total_minutes: total_duration_minutes(components, words_per_minute),
        calculated_seconds: components
            .iter()
            .map(|c| calculated_duration_seconds(c, words_per_minute))
            .sum(),
    }
}
