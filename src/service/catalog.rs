// Static configuration per service component type

use crate::models::{ComponentCategory, ComponentType};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTypeConfig {
    pub component_type: ComponentType,
    pub label: &'static str,
    pub icon: &'static str,
    pub category: ComponentCategory,
    pub has_text: bool,
    pub has_number: bool, // hymn number or bible reference
    pub placeholder: Option<&'static str>,
    pub default_duration_minutes: u32,
}

#[allow(clippy::too_many_arguments)]
const fn config(
    component_type: ComponentType,
    label: &'static str,
    icon: &'static str,
    category: ComponentCategory,
    has_text: bool,
    has_number: bool,
    placeholder: Option<&'static str>,
    default_duration_minutes: u32,
) -> ComponentTypeConfig {
    ComponentTypeConfig {
        component_type,
        label,
        icon,
        category,
        has_text,
        has_number,
        placeholder,
        default_duration_minutes,
    }
}

use ComponentCategory as C;
use ComponentType as T;

static CATALOG: [ComponentTypeConfig; 23] = [
    config(T::Votum, "Votum", "🎙️", C::SpokenActs, true, false, Some("Im Namen des Vaters und des Sohnes..."), 1),
    config(T::Begruessung, "Begrüßung", "👋", C::SpokenActs, true, false, Some("Herzlich willkommen zum Gottesdienst..."), 2),
    config(T::Abkuendigungen, "Abkündigungen", "📢", C::SpokenActs, true, false, Some("Hinweise und Ankündigungen..."), 3),
    config(T::Kollekte, "Kollekte", "💰", C::SpokenActs, true, false, Some("Die heutige Kollekte ist bestimmt für..."), 2),
    config(T::Eingangsgebet, "Eingangsgebet", "🙏", C::Prayers, true, false, Some("Guter Gott, wir sind zusammengekommen..."), 2),
    config(T::Fuerbitten, "Fürbitten", "🤲", C::Prayers, true, false, Some("Barmherziger Gott, wir bitten dich..."), 3),
    config(T::Segen, "Segen", "✋", C::Prayers, true, false, Some("Es segne euch der allmächtige Gott..."), 1),
    config(T::Lied, "Lied", "🎵", C::Hymns, false, true, Some("EG 123 oder HELM 45 oder..."), 4),
    config(T::Kyrie, "Kyrie", "🎼", C::Liturgies, true, false, Some("Herr, erbarme dich..."), 2),
    config(T::Gloria, "Gloria", "✨", C::Liturgies, true, false, Some("Ehre sei Gott in der Höhe..."), 2),
    config(T::Glaubensbekenntnis, "Glaubensbekenntnis", "📖", C::Liturgies, true, false, Some("Ich glaube an Gott, den Vater..."), 2),
    config(T::VaterUnser, "Vater Unser", "👨‍👧‍👦", C::Liturgies, false, false, None, 1),
    config(T::AltesTestament, "Altes Testament", "📜", C::Readings, false, true, Some("1. Mose 1,1-31"), 3),
    config(T::Epistel, "Epistel", "✉️", C::Readings, false, true, Some("Röm 8,1-11"), 3),
    config(T::Predigttext, "Predigttext", "📖", C::Readings, false, true, Some("Mt 5,1-12"), 4),
    config(T::Evangelium, "Evangelium", "✝️", C::Readings, false, true, Some("Joh 3,16-21"), 3),
    config(T::Predigt, "Predigt", "🗣️", C::Sermon, true, false, Some("Liebe Gemeinde, der heutige Predigttext..."), 15),
    config(T::Abendmahl, "Abendmahl", "🍞", C::Sacraments, true, false, Some("Einsetzungsworte und Austeilung..."), 10),
    config(T::Taufe, "Taufe", "💧", C::Sacraments, true, false, Some("Taufhandlung und Taufspruch..."), 8),
    config(T::Trauung, "Trauung", "💍", C::OccasionalRites, true, false, Some("Traufragen und Trauspruch..."), 10),
    config(T::Bestattung, "Bestattung", "🕯️", C::OccasionalRites, true, false, Some("Lebenslauf und Aussegnung..."), 10),
    config(T::Konfirmation, "Konfirmation", "🙌", C::OccasionalRites, true, false, Some("Konfirmationsfragen und Einsegnung..."), 10),
    config(T::Freitext, "Freier Text", "📝", C::Free, true, false, Some("Eigener Abschnitt..."), 2),
];

pub fn component_config(component_type: ComponentType) -> &'static ComponentTypeConfig {
    // One entry per variant, in declaration order.
    &CATALOG[component_type as usize]
}

pub fn components_by_category() -> BTreeMap<ComponentCategory, Vec<&'static ComponentTypeConfig>> {
    let mut categories: BTreeMap<ComponentCategory, Vec<&'static ComponentTypeConfig>> =
        BTreeMap::new();
    for config in CATALOG.iter() {
        categories.entry(config.category).or_default().push(config);
    }
    categories
}

/// Scripture readings carry a bible reference and verse payload.
pub fn is_reading(component_type: ComponentType) -> bool {
    component_config(component_type).category == ComponentCategory::Readings
}
