// file: src/models/component.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::utils::word_count;

/// Kinds of liturgical acts a service run-sheet can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    // Sprechakte
    Votum,
    Begruessung,
    Abkuendigungen,
    Kollekte,
    // Gebete & Segen
    Eingangsgebet,
    Fuerbitten,
    Segen,
    // Lieder
    Lied,
    // Liturgien
    Kyrie,
    Gloria,
    Glaubensbekenntnis,
    VaterUnser,
    // Bibellesungen
    AltesTestament,
    Epistel,
    Predigttext,
    Evangelium,
    // Predigt
    Predigt,
    // Sakramente
    Abendmahl,
    Taufe,
    // Kasualien
    Trauung,
    Bestattung,
    Konfirmation,
    // Frei
    Freitext,
}

impl ComponentType {
    pub const ALL: [ComponentType; 23] = [
        ComponentType::Votum,
        ComponentType::Begruessung,
        ComponentType::Abkuendigungen,
        ComponentType::Kollekte,
        ComponentType::Eingangsgebet,
        ComponentType::Fuerbitten,
        ComponentType::Segen,
        ComponentType::Lied,
        ComponentType::Kyrie,
        ComponentType::Gloria,
        ComponentType::Glaubensbekenntnis,
        ComponentType::VaterUnser,
        ComponentType::AltesTestament,
        ComponentType::Epistel,
        ComponentType::Predigttext,
        ComponentType::Evangelium,
        ComponentType::Predigt,
        ComponentType::Abendmahl,
        ComponentType::Taufe,
        ComponentType::Trauung,
        ComponentType::Bestattung,
        ComponentType::Konfirmation,
        ComponentType::Freitext,
    ];
}

/// Grouping used by the component picker. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentCategory {
    SpokenActs,
    Prayers,
    Hymns,
    Liturgies,
    Readings,
    Sermon,
    Sacraments,
    OccasionalRites,
    Free,
}

impl ComponentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentCategory::SpokenActs => "Sprechakte",
            ComponentCategory::Prayers => "Gebete & Segen",
            ComponentCategory::Hymns => "Lieder",
            ComponentCategory::Liturgies => "Liturgien",
            ComponentCategory::Readings => "Bibellesungen",
            ComponentCategory::Sermon => "Predigt",
            ComponentCategory::Sacraments => "Sakramente",
            ComponentCategory::OccasionalRites => "Kasualien",
            ComponentCategory::Free => "Frei",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibleVerse {
    pub number: u32,
    pub text: String,
}

/// Verse payload attached to a reading, as delivered by the bible backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BibleText {
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub verses: Vec<BibleVerse>,
}

impl BibleText {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn word_count(&self) -> usize {
        self.verses
            .iter()
            .map(|v| word_count(&v.text))
            .sum()
    }
}

/// One row of a service run-sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceComponent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub bible_reference: Option<String>,
    #[serde(default)]
    pub bible_translation: Option<String>,
    #[serde(default)]
    pub bible_text: Option<BibleText>,
    #[serde(default)]
    pub hymn_number: Option<String>,
    pub order_position: usize,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ServiceComponent {
    pub fn new(component_type: ComponentType, title: String, order_position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            component_type,
            title,
            content: None,
            bible_reference: None,
            bible_translation: None,
            bible_text: None,
            hymn_number: None,
            order_position,
            duration_minutes: None,
            notes: None,
        }
    }

    /// Content with surrounding whitespace removed, `None` when blank.
    pub fn text(&self) -> Option<&str> {
        self.content
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// A planned service together with its run-sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePlan {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub congregation_size: Option<u32>,
    #[serde(default)]
    pub components: Vec<ServiceComponent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_serde_names() {
        let json = serde_json::to_string(&ComponentType::VaterUnser).unwrap();
        assert_eq!(json, "\"vater_unser\"");
        let parsed: ComponentType = serde_json::from_str("\"altes_testament\"").unwrap();
        assert_eq!(parsed, ComponentType::AltesTestament);
    }

    #[test]
    fn test_category_order() {
        assert!(ComponentCategory::SpokenActs < ComponentCategory::Free);
        assert!(ComponentCategory::Readings < ComponentCategory::Sermon);
    }

    #[test]
    fn test_bible_text_from_json() {
        let text = BibleText::from_json(
            r#"{"translation":"LUT","verses":[{"number":16,"text":"Denn also hat Gott die Welt geliebt"},{"number":17,"text":"Denn Gott hat seinen Sohn nicht gesandt"}]}"#,
        )
        .unwrap();
        assert_eq!(text.translation.as_deref(), Some("LUT"));
        assert_eq!(text.verses.len(), 2);
        assert_eq!(text.word_count(), 14);
    }

    #[test]
    fn test_bible_text_rejects_garbage() {
        assert!(BibleText::from_json("not json").is_err());
    }

    #[test]
    fn test_text_ignores_blank_content() {
        let mut component = ServiceComponent::new(ComponentType::Predigt, "Predigt".to_string(), 0);
        assert_eq!(component.text(), None);
        component.content = Some("   \n".to_string());
        assert_eq!(component.text(), None);
        component.content = Some("  Liebe Gemeinde ".to_string());
        assert_eq!(component.text(), Some("Liebe Gemeinde"));
    }

    #[test]
    fn test_component_deserializes_with_defaults() {
        let json = r#"{
            "id": "6f1c1a6e-2f5e-4a52-9d8e-0c4b2b1f7a11",
            "type": "lied",
            "title": "Eingangslied",
            "hymn_number": "EG 1",
            "order_position": 0
        }"#;
        let component: ServiceComponent = serde_json::from_str(json).unwrap();
        assert_eq!(component.component_type, ComponentType::Lied);
        assert_eq!(component.hymn_number.as_deref(), Some("EG 1"));
        assert!(component.duration_minutes.is_none());
    }
}
