// Hymn-book index (Evangelisches Gesangbuch) and EG number assignment

use crate::error::AppResult;
use crate::models::ChurchEvent;
use crate::utils::normalize_whitespace;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

lazy_static! {
    // "<number> <title> <verse count>", e.g. "4 Nun komm, der Heiden Heiland 5"
    static ref INDEX_LINE: Regex = Regex::new(r"^(\d+)\s+(.+?)\s+(\d+)$")
        .expect("index line pattern is valid");
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").expect("punctuation pattern is valid");
}

/// Maps hymn titles (lower-cased) to their EG number.
#[derive(Debug, Clone, Default)]
pub struct HymnIndex {
    numbers: HashMap<String, String>,
}

impl HymnIndex {
    pub fn parse(text: &str) -> Self {
        let mut numbers = HashMap::new();

        for line in text.lines().map(str::trim) {
            if !line.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }
            let Some(captures) = INDEX_LINE.captures(line) else {
                continue;
            };

            let number = captures[1].to_string();
            let title = normalize_whitespace(&captures[2]);
            numbers.insert(title.to_lowercase(), number.clone());

            let bare = normalize_whitespace(&PUNCTUATION.replace_all(&title, ""));
            if bare != title {
                numbers.insert(bare.to_lowercase(), number);
            }
        }

        log::debug!("Hymn index holds {} titles", numbers.len());
        Self { numbers }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// EG number for a title, compared case-insensitively with whitespace
    /// collapsed.
    pub fn lookup(&self, title: &str) -> Option<&str> {
        self.numbers
            .get(&normalize_whitespace(title).to_lowercase())
            .map(String::as_str)
    }
}

/// Fills `hymn1_eg` / `hymn2_eg` from the index where still unset.
/// Returns how many fields were assigned.
pub fn assign_eg_numbers(events: &mut [ChurchEvent], index: &HymnIndex) -> usize {
    let mut assigned = 0;

    for event in events.iter_mut() {
        if event.hymn1_eg.is_none() {
            if let Some(number) = event.hymn1.as_deref().and_then(|h| index.lookup(h)) {
                event.hymn1_eg = Some(format!("EG {}", number));
                assigned += 1;
            }
        }
        if event.hymn2_eg.is_none() {
            if let Some(number) = event.hymn2.as_deref().and_then(|h| index.lookup(h)) {
                event.hymn2_eg = Some(format!("EG {}", number));
                assigned += 1;
            }
        }
    }

    assigned
}
