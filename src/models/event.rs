// file: src/models/event.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day of the liturgical calendar, as read from a VEVENT block.
///
/// Every optional field stays `None` unless the source description named it,
/// so "not specified" and "present but blank" remain distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurchEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub date: NaiveDate,
    pub url: Option<String>,
    pub liturgical_color: Option<String>,
    pub season: Option<String>,
    pub weekly_verse: Option<String>,
    pub weekly_verse_reference: Option<String>,
    pub psalm: Option<String>,
    pub old_testament_reading: Option<String>,
    pub epistle: Option<String>,
    pub gospel: Option<String>,
    pub sermon_text: Option<String>,
    pub hymn: Option<String>,
    pub hymn1: Option<String>,
    pub hymn2: Option<String>,
    #[serde(rename = "hymn1_eg")]
    pub hymn1_eg: Option<String>,
    #[serde(rename = "hymn2_eg")]
    pub hymn2_eg: Option<String>,
    /// Pericope series ("I".."VI") to reading reference.
    pub perikopen: Option<BTreeMap<String, String>>,
}

impl ChurchEvent {
    pub fn new(uid: String, summary: String, date: NaiveDate) -> Self {
        Self {
            uid,
            summary,
            description: String::new(),
            date,
            url: None,
            liturgical_color: None,
            season: None,
            weekly_verse: None,
            weekly_verse_reference: None,
            psalm: None,
            old_testament_reading: None,
            epistle: None,
            gospel: None,
            sermon_text: None,
            hymn: None,
            hymn1: None,
            hymn2: None,
            hymn1_eg: None,
            hymn2_eg: None,
            perikopen: None,
        }
    }

    /// Reading of the given pericope series, if the calendar listed one.
    pub fn perikope(&self, series: &str) -> Option<&str> {
        self.perikopen
            .as_ref()
            .and_then(|p| p.get(series))
            .map(String::as_str)
    }

    pub fn is_sunday(&self) -> bool {
        use chrono::{Datelike, Weekday};
        self.date.weekday() == Weekday::Sun
    }
}
