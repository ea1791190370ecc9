// Plain-text summaries of a service plan for musicians and the sexton

use crate::models::{ComponentType, ServicePlan};
use crate::service::duration::{format_duration, total_duration_minutes};

fn when(plan: &ServicePlan) -> String {
    let date = plan.date.format("%d.%m.%Y");
    match plan.time {
        Some(time) => format!("{} um {}", date, time.format("%H:%M")),
        None => date.to_string(),
    }
}

/// Numbered hymn list with hymn numbers and the total duration.
pub fn musician_list(plan: &ServicePlan, words_per_minute: u32) -> String {
    let hymns: Vec<String> = plan
        .components
        .iter()
        .filter(|c| c.component_type == ComponentType::Lied)
        .filter_map(|c| {
            let number = c.hymn_number.as_deref().map(str::trim)?;
            (!number.is_empty()).then(|| (c.title.as_str(), number))
        })
        .enumerate()
        .map(|(i, (title, number))| format!("{}. {}: {}", i + 1, title, number))
        .collect();

    let hymns = if hymns.is_empty() {
        "Keine Lieder eingetragen".to_string()
    } else {
        hymns.join("\n")
    };

    format!(
        "🎵 Gottesdienst {}\n📅 {}\n\nLieder:\n{}\n\nGesamtdauer: ca. {}",
        plan.title,
        when(plan),
        hymns,
        format_duration(total_duration_minutes(&plan.components, words_per_minute))
    )
}

/// Location, expected attendance, the sacraments that need preparing and
/// any component notes.
pub fn sexton_list(plan: &ServicePlan, words_per_minute: u32) -> String {
    let has = |t: ComponentType| plan.components.iter().any(|c| c.component_type == t);

    let mut preparations = Vec::new();
    if has(ComponentType::Abendmahl) {
        preparations.push("🍞 Abendmahl vorbereiten");
    }
    if has(ComponentType::Taufe) {
        preparations.push("💧 Taufe vorbereiten");
    }
    let preparations = if preparations.is_empty() {
        "Keine".to_string()
    } else {
        preparations.join("\n")
    };

    let attendance = plan
        .congregation_size
        .map(|n| n.to_string())
        .unwrap_or_else(|| "Unbekannt".to_string());

    let mut text = format!("⛪ Gottesdienst {}\n📅 {}\n", plan.title, when(plan));
    if let Some(location) = plan.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        text.push_str(&format!("📍 {}\n", location));
    }
    text.push_str(&format!(
        "👥 Erwartete Teilnehmer: {}\n\nBesonderheiten:\n{}\n",
        attendance, preparations
    ));

    let notes: Vec<String> = plan
        .components
        .iter()
        .filter_map(|c| {
            let note = c.notes.as_deref().map(str::trim)?;
            (!note.is_empty()).then(|| format!("- {}: {}", c.title, note))
        })
        .collect();
    if !notes.is_empty() {
        text.push_str(&format!("\n📝 Hinweise:\n{}\n", notes.join("\n")));
    }

    text.push_str(&format!(
        "\nDauer: ca. {}",
        format_duration(total_duration_minutes(&plan.components, words_per_minute))
    ));
    text
}
