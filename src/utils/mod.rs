use lazy_static::lazy_static;
use regex::Regex;

pub mod logging;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
}

/// Whitespace-delimited, non-empty tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Trims and collapses every run of whitespace into one space.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with "…".
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("Denn also hat Gott"), 4);
        assert_eq!(word_count(" Liebe\n\tGemeinde, "), 2);
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Nun  komm,\n der\tHeiden Heiland "), "Nun komm, der Heiden Heiland");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Advent", 10), "Advent");
        assert_eq!(truncate_chars("Weihnachtszeit", 6), "Weihn…");
        assert_eq!(truncate_chars("Grün und Weiß", 5), "Grün…");
    }
}
