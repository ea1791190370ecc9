// Lookups over a parsed calendar. Nothing here mutates the event list.

use crate::models::ChurchEvent;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const UNKNOWN_SEASON: &str = "Unbekannt";

pub fn find_events_for_date(events: &[ChurchEvent], date: NaiveDate) -> Vec<&ChurchEvent> {
    events.iter().filter(|e| e.date == date).collect()
}

/// Earliest event on or after `from`.
pub fn find_next_event(events: &[ChurchEvent], from: NaiveDate) -> Option<&ChurchEvent> {
    events
        .iter()
        .filter(|e| e.date >= from)
        .min_by_key(|e| e.date)
}

pub fn find_next_event_from_today(events: &[ChurchEvent]) -> Option<&ChurchEvent> {
    find_next_event(events, Local::now().date_naive())
}

/// Events between `start` and `end`, both days included.
pub fn find_events_in_range(
    events: &[ChurchEvent],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&ChurchEvent> {
    events
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect()
}

pub fn group_by_season(events: &[ChurchEvent]) -> BTreeMap<String, Vec<&ChurchEvent>> {
    group_by_season_with_label(events, UNKNOWN_SEASON)
}

/// Groups events by `season`; events without one go under `unknown_label`.
/// Within a group, events keep the order they had in `events`.
pub fn group_by_season_with_label<'a>(
    events: &'a [ChurchEvent],
    unknown_label: &str,
) -> BTreeMap<String, Vec<&'a ChurchEvent>> {
    let mut grouped: BTreeMap<String, Vec<&ChurchEvent>> = BTreeMap::new();

    for event in events {
        let season = event.season.as_deref().unwrap_or(unknown_label);
        grouped.entry(season.to_string()).or_default().push(event);
    }

    grouped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiturgicalColorClass {
    Violet,
    White,
    Red,
    Green,
    Black,
    Rose,
    Neutral,
}

impl LiturgicalColorClass {
    pub fn css_classes(&self) -> &'static str {
        match self {
            LiturgicalColorClass::Violet => "bg-purple-100 text-purple-800",
            LiturgicalColorClass::White => "bg-gray-50 text-gray-800 border border-gray-200",
            LiturgicalColorClass::Red => "bg-red-100 text-red-800",
            LiturgicalColorClass::Green => "bg-green-100 text-green-800",
            LiturgicalColorClass::Black => "bg-gray-800 text-white",
            LiturgicalColorClass::Rose => "bg-pink-100 text-pink-800",
            LiturgicalColorClass::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

pub fn liturgical_color_class(color: Option<&str>) -> LiturgicalColorClass {
    let Some(color) = color else {
        return LiturgicalColorClass::Neutral;
    };

    match color.trim().to_lowercase().as_str() {
        "violett" | "violet" => LiturgicalColorClass::Violet,
        "weiß" | "weiss" => LiturgicalColorClass::White,
        "rot" => LiturgicalColorClass::Red,
        "grün" | "gruen" => LiturgicalColorClass::Green,
        "schwarz" => LiturgicalColorClass::Black,
        "rosa" => LiturgicalColorClass::Rose,
        _ => LiturgicalColorClass::Neutral,
    }
}

/// German long date, e.g. "Sonntag, 01.12.2024".
pub fn format_event_date(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    };
    format!("{}, {}", weekday, date.format("%d.%m.%Y"))
}
