// file: src/models/reference.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bible reference in canonical form, e.g. `Johannes 3,16-18`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReference {
    pub book: String,
    pub chapter: u32,
    pub verse_start: u32,
    pub verse_end: Option<u32>,
    pub original_input: String,
    pub normalized: String,
}

impl ParsedReference {
    pub fn new(
        book: String,
        chapter: u32,
        verse_start: u32,
        verse_end: Option<u32>,
        original_input: String,
    ) -> Self {
        let normalized = match verse_end {
            Some(end) => format!("{} {},{}-{}", book, chapter, verse_start, end),
            None => format!("{} {},{}", book, chapter, verse_start),
        };

        Self {
            book,
            chapter,
            verse_start,
            verse_end,
            original_input,
            normalized,
        }
    }

    pub fn verse_count(&self) -> u32 {
        self.verse_end.unwrap_or(self.verse_start) - self.verse_start + 1
    }
}

impl fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}
