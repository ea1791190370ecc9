// Bible reference parsing
// Turns free-text references ("Joh 3,16-18", "1. Joh 1, 2-12") into ParsedReference

use crate::error::{AppError, AppResult};
use crate::models::ParsedReference;
use lazy_static::lazy_static;
use regex::Regex;

pub mod books;

lazy_static! {
    // Each pattern captures: book, chapter, verse start, optional verse end.
    static ref REFERENCE_PATTERNS: Vec<Regex> = [
        // "Johannes 3,16", "Joh 3,16-18"
        r"(?i)^([1-3]?\.?\s*[a-züäöß]+\.?)\s+(\d+)[,.]\s*(\d+)(?:\s*(?:-|–|bis)\s*(\d+))?",
        // "1. Johannes 1, 2-12"
        r"(?i)^([1-3]?\.\s*[a-züäöß]+\.?)\s+(\d+)[,.]\s*(\d+)(?:\s*(?:-|–|bis)\s*(\d+))?",
        // "1Johannes 1,2-3"
        r"(?i)^([1-3]?[a-züäöß]+\.?)\s+(\d+)[,.]\s*(\d+)(?:\s*(?:-|–|bis)\s*(\d+))?",
    ]
    .iter()
    .filter_map(|pattern| match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::error!("Invalid reference pattern {}: {}", pattern, e);
            None
        }
    })
    .collect();
}

/// Input styles the parser understands, one or more per style.
const EXAMPLES: &[&str] = &[
    "Johannes 3,16",
    "Joh 3,16-18",
    "Joh. 3, 16 - 18",
    "1. Joh 1, 2-12",
    "1Johannes 1,2-3",
    "Matthäus 5,1-12",
    "Psalm 23,1",
    "Römer 8,28-39",
    "1. Korinther 13,1-13",
];

const MAX_SUGGESTIONS: usize = 10;

/// Parses a bible reference. Returns `None` for anything that does not
/// resolve to book, chapter and start verse.
pub fn parse(input: &str) -> Option<ParsedReference> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    for pattern in REFERENCE_PATTERNS.iter() {
        let Some(captures) = pattern.captures(trimmed) else {
            continue;
        };

        let Some(book) = captures.get(1).and_then(|m| normalize_book(m.as_str().trim())) else {
            continue;
        };

        let chapter = captures.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
        let verse_start = captures.get(3).and_then(|m| m.as_str().parse::<u32>().ok());
        let (Some(chapter), Some(verse_start)) = (chapter, verse_start) else {
            continue;
        };

        let verse_end = match captures.get(4) {
            Some(m) => match m.as_str().parse::<u32>() {
                Ok(end) => Some(end),
                Err(_) => continue,
            },
            None => None,
        };

        if chapter < 1 || verse_start < 1 {
            continue;
        }
        if matches!(verse_end, Some(end) if end < verse_start) {
            continue;
        }

        return Some(ParsedReference::new(
            book,
            chapter,
            verse_start,
            verse_end,
            input.to_string(),
        ));
    }

    log::debug!("No reference pattern matched {:?}", trimmed);
    None
}

/// Maps a book token to its canonical name.
///
/// Tries the abbreviation table exactly, then by substring containment in
/// table order, and finally title-cases the token as given.
fn normalize_book(book_input: &str) -> Option<String> {
    let cleaned: String = book_input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();

    if let Some(book) = books::lookup_exact(&cleaned) {
        return Some(book.to_string());
    }

    if let Some(book) = books::lookup_fuzzy(&cleaned) {
        return Some(book.to_string());
    }

    let fallback = title_case(book_input);
    if fallback.is_empty() {
        None
    } else {
        Some(fallback)
    }
}

fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Like `parse`, for callers that report failures instead of ignoring them.
pub fn parse_required(input: &str) -> AppResult<ParsedReference> {
    parse(input).ok_or_else(|| {
        AppError::invalid_input(format!("{:?} is not a bible reference", input.trim()))
    })
}

pub fn validate(reference: &str) -> bool {
    parse(reference).is_some()
}

pub fn examples() -> Vec<&'static str> {
    EXAMPLES.to_vec()
}

/// Canonical book names for autocomplete, in table order.
pub fn suggestions(partial: &str) -> Vec<String> {
    if partial.chars().count() < 2 {
        return Vec::new();
    }

    let lower_partial = partial.to_lowercase();
    let mut suggestions: Vec<String> = Vec::new();

    for (key, value) in books::BOOK_MAPPINGS {
        if key.starts_with(&lower_partial) || value.to_lowercase().starts_with(&lower_partial) {
            if !suggestions.iter().any(|s| s == value) {
                suggestions.push(value.to_string());
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_book_name() {
        let r = parse("Johannes 3,16").unwrap();
        assert_eq!(r.book, "Johannes");
        assert_eq!(r.chapter, 3);
        assert_eq!(r.verse_start, 16);
        assert_eq!(r.verse_end, None);
        assert_eq!(r.normalized, "Johannes 3,16");
        assert_eq!(r.original_input, "Johannes 3,16");
    }

    #[test]
    fn test_parse_abbreviation_with_range() {
        let r = parse("Joh 3,16-18").unwrap();
        assert_eq!(r.book, "Johannes");
        assert_eq!(r.verse_start, 16);
        assert_eq!(r.verse_end, Some(18));
        assert_eq!(r.normalized, "Johannes 3,16-18");
    }

    #[test]
    fn test_parse_ordinal_with_period() {
        let r = parse("1. Joh 1, 2-12").unwrap();
        assert_eq!(r.book, "1. Johannes");
        assert_eq!(r.chapter, 1);
        assert_eq!(r.verse_start, 2);
        assert_eq!(r.verse_end, Some(12));
    }

    #[test]
    fn test_parse_ordinal_glued() {
        let r = parse("1Johannes 1,2-3").unwrap();
        assert_eq!(r.book, "1. Johannes");
        assert_eq!(r.normalized, "1. Johannes 1,2-3");
    }

    #[test]
    fn test_parse_spaced_punctuation() {
        let r = parse("Joh. 3, 16 - 18").unwrap();
        assert_eq!(r.normalized, "Johannes 3,16-18");
    }

    #[test]
    fn test_parse_bis_and_en_dash() {
        assert_eq!(parse("Ps 23,1 bis 6").unwrap().verse_end, Some(6));
        assert_eq!(parse("Mt 5,1–12").unwrap().verse_end, Some(12));
    }

    #[test]
    fn test_parse_period_as_verse_separator() {
        let r = parse("Lk 2.1-20").unwrap();
        assert_eq!(r.book, "Lukas");
        assert_eq!(r.chapter, 2);
        assert_eq!(r.verse_end, Some(20));
    }

    #[test]
    fn test_parse_preserves_original_input() {
        let r = parse("  Joh 3,16  ").unwrap();
        assert_eq!(r.original_input, "  Joh 3,16  ");
    }

    #[test]
    fn test_parse_rejects_empty_and_text() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
        assert!(parse("not a reference").is_none());
    }

    #[test]
    fn test_parse_rejects_zero_chapter_and_verse() {
        assert!(parse("Joh 0,16").is_none());
        assert!(parse("Joh 3,0").is_none());
    }

    #[test]
    fn test_parse_rejects_descending_range() {
        assert!(parse("Joh 3,18-16").is_none());
    }

    #[test]
    fn test_unknown_book_is_title_cased() {
        let r = parse("nehemia 8,10").unwrap();
        assert_eq!(r.book, "Nehemia");
        assert_eq!(r.normalized, "Nehemia 8,10");
    }

    #[test]
    fn test_fuzzy_book_match() {
        assert_eq!(parse("Römer 8,28-39").unwrap().book, "Römer");
        assert_eq!(parse("1. Korinther 13,1-13").unwrap().book, "1. Korinther");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hohes LIED"), "Hohes Lied");
        assert_eq!(title_case("ämos"), "Ämos");
    }

    #[test]
    fn test_parse_required() {
        assert_eq!(parse_required("Joh 3,16").unwrap().normalized, "Johannes 3,16");

        let err = parse_required("  Gemeindefest ").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.to_safe_string(), "Invalid input: \"Gemeindefest\" is not a bible reference");
    }

    #[test]
    fn test_validate() {
        assert!(validate("Psalm 23,1"));
        assert!(!validate("Psalm"));
    }

    #[test]
    fn test_examples_all_validate() {
        for example in examples() {
            assert!(validate(example), "example {:?} should parse", example);
        }
    }

    #[test]
    fn test_suggestions() {
        assert!(suggestions("j").is_empty());
        assert!(suggestions("").is_empty());

        let joh = suggestions("joh");
        assert_eq!(joh, vec!["Johannes".to_string(), "John".to_string()]);

        let first = suggestions("1.");
        assert!(first.contains(&"1. Mose".to_string()));
        assert!(first.contains(&"1. Johannes".to_string()));
    }

    #[test]
    fn test_suggestions_capped_and_unique() {
        assert!(suggestions("1").is_empty());

        let results = suggestions("ja");
        let mut deduped = results.clone();
        deduped.dedup();
        assert_eq!(results, deduped);
        assert!(results.len() <= MAX_SUGGESTIONS);
    }
}
