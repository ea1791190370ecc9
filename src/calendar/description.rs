// Liturgical DESCRIPTION parsing
// The kirchenjahr feed packs labelled lines ("Festzeit: Advent") and the six
// pericope series into a single DESCRIPTION value with literal "\n" escapes.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    // Words the upstream feed splits with a stray space, applied in order.
    static ref WORD_REPAIRS: Vec<(Regex, &'static str)> = [
        (r"Ep\s+istel", "Epistel"),
        (r"J\s+es\s+", "Jes "),
        (r"J\s+ak\s+", "Jak "),
        (r"W\s+ochenlied", "Wochenlied"),
        (r"D\s+ie\s+einzelnen", "Die einzelnen"),
        (r"ilt\s+in\s+die", "ilt in die"),
        (r"gil\s+t\s+-\s+beginnend", "gilt - beginnend"),
    ]
    .iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, *replacement)))
    .collect();

    static ref PERIKOPE_LINE: Regex = Regex::new(r"^(VI|IV|V|I{1,3}):\s*(.+)$")
        .expect("pericope pattern is valid");

    static ref TRAILING_REFERENCE: Regex = Regex::new(r"\(([^)]+)\)\s*$")
        .expect("reference pattern is valid");
}

/// Preamble phrases that precede the pericope list.
const PERIKOPEN_MARKERS: &[&str] = &[
    "Erklärung zu den Perikopen:",
    "Die biblischen Predigttexte sind aufgeteilt",
    "Jede Reihe gilt",
    "Die einzelnen Reihen haben",
];

const HYMN_SEPARATOR: &str = " / ";

/// Fields extracted from one DESCRIPTION value. Unnamed fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiturgicalDetails {
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
    pub perikopen: Option<BTreeMap<String, String>>,
}

pub fn parse_description(raw: &str) -> LiturgicalDetails {
    let cleaned = clean_description(raw);

    let mut details = LiturgicalDetails::default();
    let mut perikopen = BTreeMap::new();
    let mut in_perikopen = false;
    // Wochenpsalm wins over Eingangspsalm regardless of line order.
    let mut psalm_from_week = false;

    for line in cleaned.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if PERIKOPEN_MARKERS.iter().any(|marker| line.contains(marker)) {
            in_perikopen = true;
            continue;
        }

        if in_perikopen {
            if let Some(captures) = PERIKOPE_LINE.captures(line) {
                perikopen.insert(captures[1].to_string(), captures[2].trim().to_string());
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();

        match key.trim() {
            "liturgische Farbe" => details.liturgical_color = Some(value),
            "Festzeit" => details.season = Some(value),
            "Wochenspruch" => {
                details.weekly_verse_reference = TRAILING_REFERENCE
                    .captures(&value)
                    .map(|c| c[1].trim().to_string());
                details.weekly_verse = Some(value);
            }
            "Wochenpsalm" => {
                details.psalm = Some(value);
                psalm_from_week = true;
            }
            "Eingangspsalm" => {
                if !psalm_from_week && details.psalm.is_none() {
                    details.psalm = Some(value);
                }
            }
            "AT-Lesung" => details.old_testament_reading = Some(value),
            "Epistel" => details.epistle = Some(value),
            "Evangelium" => details.gospel = Some(value),
            "Predigttext" => details.sermon_text = Some(value),
            "Wochenlied" => {
                let (hymn1, hymn2) = split_hymns(&value);
                details.hymn1 = hymn1;
                details.hymn2 = hymn2;
                details.hymn = Some(value);
            }
            _ => {}
        }
    }

    if !perikopen.is_empty() {
        details.perikopen = Some(perikopen);
    }

    details
}

/// Turns escaped line breaks into real ones and patches known split words.
pub fn clean_description(raw: &str) -> String {
    let mut text = raw
        .replace("\\n", "\n")
        .replace("\\N", "\n")
        .replace("\\,", ",")
        .replace("\\;", ";");

    for (pattern, replacement) in WORD_REPAIRS.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    text
}

fn split_hymns(value: &str) -> (Option<String>, Option<String>) {
    let mut parts = value
        .split(HYMN_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    (parts.next(), parts.next())
}
