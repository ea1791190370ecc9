// Liturgical calendar integration
// Parses the kirchenjahr ICS feed into ChurchEvent records

use crate::error::{AppError, AppResult};
use crate::models::ChurchEvent;
use crate::utils::logging;
use chrono::{Local, NaiveDate};
use std::path::Path;
use std::time::Instant;

pub mod description;
pub mod hymns;
pub mod query;

pub use description::{parse_description, LiturgicalDetails};
pub use hymns::{assign_eg_numbers, HymnIndex};
pub use query::{
    find_events_for_date, find_events_in_range, find_next_event, find_next_event_from_today,
    format_event_date, group_by_season, group_by_season_with_label, liturgical_color_class,
    LiturgicalColorClass, UNKNOWN_SEASON,
};

/// Event being assembled between BEGIN:VEVENT and END:VEVENT.
#[derive(Debug, Default)]
struct PendingEvent {
    uid: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    date: Option<NaiveDate>,
    url: Option<String>,
    details: LiturgicalDetails,
}

impl PendingEvent {
    fn set_property(&mut self, property: &str, value: String) {
        match property {
            "UID" => self.uid = Some(value),
            "SUMMARY" => self.summary = Some(value),
            "DESCRIPTION" => {
                self.details = parse_description(&value);
                self.description = Some(value);
            }
            "DTSTART" | "DTSTART;VALUE=DATE" => self.date = Some(parse_ics_date(&value)),
            "URL" | "URL;VALUE=URI" => self.url = Some(value),
            _ => {}
        }
    }

    fn into_event(self) -> Option<ChurchEvent> {
        let uid = self.uid.filter(|u| !u.is_empty())?;
        let summary = self.summary.filter(|s| !s.is_empty())?;
        let date = self.date?;

        let details = self.details;
        Some(ChurchEvent {
            description: self.description.unwrap_or_default(),
            url: self.url,
            liturgical_color: details.liturgical_color,
            season: details.season,
            weekly_verse: details.weekly_verse,
            weekly_verse_reference: details.weekly_verse_reference,
            psalm: details.psalm,
            old_testament_reading: details.old_testament_reading,
            epistle: details.epistle,
            gospel: details.gospel,
            sermon_text: details.sermon_text,
            hymn: details.hymn,
            hymn1: details.hymn1,
            hymn2: details.hymn2,
            perikopen: details.perikopen,
            ..ChurchEvent::new(uid, summary, date)
        })
    }
}

/// Parses ICS text into church events sorted by date.
///
/// Lenient by design of the feed: events without UID, SUMMARY or DTSTART are
/// dropped, unknown properties are ignored and nothing here returns an error.
pub fn parse_calendar(ics_content: &str) -> Vec<ChurchEvent> {
    let started = Instant::now();
    let mut events = Vec::new();
    let mut dropped = 0usize;

    let mut current: Option<PendingEvent> = None;
    // Property whose value may still grow through folded continuation lines.
    let mut pending: Option<(String, String)> = None;

    for raw_line in ics_content.split('\n') {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some((_, value)) = pending.as_mut() {
                value.push_str(&line[1..]);
            }
            continue;
        }

        if let (Some(event), Some((property, value))) = (current.as_mut(), pending.take()) {
            if !value.is_empty() {
                event.set_property(&property, value);
            }
        }

        match line.trim() {
            "BEGIN:VEVENT" => {
                if current.is_some() {
                    log::debug!("BEGIN:VEVENT inside an open event, discarding the open one");
                    dropped += 1;
                }
                current = Some(PendingEvent::default());
                continue;
            }
            "END:VEVENT" => {
                if let Some(event) = current.take() {
                    match event.into_event() {
                        Some(event) => events.push(event),
                        None => dropped += 1,
                    }
                }
                continue;
            }
            _ => {}
        }

        if current.is_none() {
            continue;
        }

        if let Some((property, value)) = line.split_once(':') {
            pending = Some((property.to_string(), value.to_string()));
        }
    }

    if current.is_some() {
        log::debug!("Calendar ended inside an unterminated VEVENT");
        dropped += 1;
    }

    events.sort_by_key(|e| e.date);

    logging::log_calendar_parse(events.len(), dropped, started.elapsed().as_millis() as u64);
    events
}

/// Reads and parses an ICS file from disk. A file without a VCALENDAR
/// block is rejected; everything inside one is parsed leniently.
pub fn read_calendar_file(path: &Path) -> AppResult<Vec<ChurchEvent>> {
    let content = std::fs::read_to_string(path)?;
    if !content.contains("BEGIN:VCALENDAR") {
        return Err(AppError::calendar(format!(
            "{} is not an ICS calendar (no BEGIN:VCALENDAR)",
            path.display()
        )));
    }
    Ok(parse_calendar(&content))
}

/// Date part of a DTSTART value. Falls back to today when the value is not
/// a usable `YYYYMMDD` date, so a malformed date reads like "today".
pub fn parse_ics_date(value: &str) -> NaiveDate {
    match parse_ics_date_strict(value) {
        Some(date) => date,
        None => {
            log::warn!("Malformed DTSTART value {:?}, falling back to today", value);
            Local::now().date_naive()
        }
    }
}

fn parse_ics_date_strict(value: &str) -> Option<NaiveDate> {
    // Everything from the first whitespace on is a time part.
    let date_part = value.split(char::is_whitespace).next().unwrap_or("");
    let digits: String = date_part.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 8 {
        return None;
    }

    let year = digits[0..4].parse::<i32>().ok()?;
    let month = digits[4..6].parse::<u32>().ok()?;
    let day = digits[6..8].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
