use chrono::NaiveDate;
use kirchenjahr::calendar::{
    assign_eg_numbers, find_events_for_date, find_events_in_range, find_next_event,
    group_by_season, liturgical_color_class, parse_calendar, read_calendar_file, HymnIndex,
    LiturgicalColorClass, UNKNOWN_SEASON,
};
use kirchenjahr::ChurchEvent;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn load_events() -> Vec<ChurchEvent> {
    read_calendar_file(&fixture("kirchenjahr.ics")).expect("fixture calendar is readable")
}

fn by_summary<'a>(events: &'a [ChurchEvent], summary: &str) -> &'a ChurchEvent {
    events
        .iter()
        .find(|e| e.summary == summary)
        .unwrap_or_else(|| panic!("no event {:?}", summary))
}

#[test]
fn test_fixture_events_are_complete_and_sorted() {
    let events = load_events();
    let summaries: Vec<&str> = events.iter().map(|e| e.summary.as_str()).collect();
    assert_eq!(
        summaries,
        vec![
            "1. Sonntag im Advent",
            "2. Sonntag im Advent",
            "Christvesper",
            "Epiphanias",
            "Estomihi"
        ]
    );
    assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));
    assert!(!summaries.contains(&"Ohne UID"));
}

#[test]
fn test_folded_description_fields() {
    let events = load_events();
    let advent = by_summary(&events, "1. Sonntag im Advent");

    assert_eq!(advent.uid, "kj-2024-12-01@kirchenjahr-evangelisch.de");
    assert_eq!(advent.date, date(2024, 12, 1));
    assert_eq!(advent.liturgical_color.as_deref(), Some("Violett"));
    assert_eq!(advent.season.as_deref(), Some("Advent"));
    assert_eq!(
        advent.weekly_verse.as_deref(),
        Some("Siehe, dein König kommt zu dir, ein Gerechter und ein Helfer. (Sach 9,9a)")
    );
    assert_eq!(advent.weekly_verse_reference.as_deref(), Some("Sach 9,9a"));
    assert_eq!(advent.psalm.as_deref(), Some("Ps 24"));
    assert_eq!(advent.old_testament_reading.as_deref(), Some("Sach 9,9-10"));
    assert_eq!(advent.epistle.as_deref(), Some("Röm 13,8-12"));
    assert_eq!(advent.gospel.as_deref(), Some("Mt 21,1-11"));
    assert_eq!(advent.sermon_text.as_deref(), Some("Jer 23,5-8"));
    assert_eq!(
        advent.url.as_deref(),
        Some("https://kirchenjahr-evangelisch.de/article.php#1")
    );
}

#[test]
fn test_pericope_series() {
    let events = load_events();
    let advent = by_summary(&events, "1. Sonntag im Advent");
    let perikopen = advent.perikopen.as_ref().expect("pericopes present");

    assert_eq!(perikopen.len(), 6);
    assert_eq!(perikopen["I"], "Mt 21,1-11");
    assert_eq!(perikopen["III"], "Sach 9,9-10");
    assert_eq!(perikopen["V"], "Jer 23,5-8");
    assert_eq!(perikopen["VI"], "Offb 5,1-5");
    assert_eq!(advent.perikope("IV"), Some("Mt 21,1-9"));

    assert!(by_summary(&events, "Christvesper").perikopen.is_none());
}

#[test]
fn test_weekly_psalm_beats_entry_psalm() {
    let events = load_events();
    let second_advent = by_summary(&events, "2. Sonntag im Advent");
    assert_eq!(second_advent.psalm.as_deref(), Some("Ps 80,2-7"));
}

#[test]
fn test_weekly_hymn_is_split() {
    let events = load_events();
    let christmas = by_summary(&events, "Christvesper");
    assert_eq!(christmas.hymn1.as_deref(), Some("Vom Himmel hoch, da komm ich her"));
    assert_eq!(christmas.hymn2.as_deref(), Some("Lobt Gott, ihr Christen alle gleich"));
    assert_eq!(
        christmas.hymn.as_deref(),
        Some("Vom Himmel hoch, da komm ich her / Lobt Gott, ihr Christen alle gleich")
    );

    let epiphany = by_summary(&events, "Epiphanias");
    assert_eq!(epiphany.hymn1.as_deref(), Some("Wie schön leuchtet der Morgenstern"));
    assert!(epiphany.hymn2.is_none());
}

#[test]
fn test_hymn_index_assignment() {
    let mut events = load_events();
    let index = HymnIndex::from_file(&fixture("eg_index.txt")).unwrap();

    assert_eq!(assign_eg_numbers(&mut events, &index), 5);

    let advent = by_summary(&events, "1. Sonntag im Advent");
    assert_eq!(advent.hymn1_eg.as_deref(), Some("EG 4"));
    assert_eq!(advent.hymn2_eg.as_deref(), Some("EG 1"));

    let christmas = by_summary(&events, "Christvesper");
    assert_eq!(christmas.hymn1_eg.as_deref(), Some("EG 24"));
    assert_eq!(christmas.hymn2_eg.as_deref(), Some("EG 27"));

    // Second pass finds nothing left to fill.
    assert_eq!(assign_eg_numbers(&mut events, &index), 0);
}

#[test]
fn test_queries_over_fixture() {
    let events = load_events();

    let next = find_next_event(&events, date(2024, 12, 2)).unwrap();
    assert_eq!(next.summary, "2. Sonntag im Advent");
    assert!(find_next_event(&events, date(2025, 3, 3)).is_none());

    assert_eq!(find_events_for_date(&events, date(2024, 12, 24)).len(), 1);

    let december = find_events_in_range(&events, date(2024, 12, 1), date(2024, 12, 31));
    assert_eq!(december.len(), 3);

    let seasons = group_by_season(&events);
    assert_eq!(seasons["Advent"].len(), 2);
    assert_eq!(seasons["Weihnachtszeit"].len(), 1);
    assert_eq!(seasons[UNKNOWN_SEASON][0].summary, "Estomihi");
}

#[test]
fn test_color_classes_for_fixture() {
    let events = load_events();
    let classes: Vec<LiturgicalColorClass> = events
        .iter()
        .map(|e| liturgical_color_class(e.liturgical_color.as_deref()))
        .collect();
    assert_eq!(
        classes,
        vec![
            LiturgicalColorClass::Violet,
            LiturgicalColorClass::Violet,
            LiturgicalColorClass::White,
            LiturgicalColorClass::White,
            LiturgicalColorClass::Neutral
        ]
    );
}

#[test]
fn test_red_description_maps_to_red_class() {
    let ics = "BEGIN:VEVENT\nUID:pf\nSUMMARY:Pfingstsonntag\nDTSTART;VALUE=DATE:20250608\nDESCRIPTION:liturgische Farbe: Rot\nEND:VEVENT";
    let events = parse_calendar(ics);
    assert_eq!(events[0].liturgical_color.as_deref(), Some("Rot"));

    let class = liturgical_color_class(events[0].liturgical_color.as_deref());
    assert_eq!(class, LiturgicalColorClass::Red);
    assert_ne!(class, liturgical_color_class(None));
}

#[test]
fn test_events_serialize_to_json() {
    let events = load_events();
    let json = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(json["summary"], "1. Sonntag im Advent");
    assert_eq!(json["liturgicalColor"], "Violett");
    assert_eq!(json["date"], "2024-12-01");
}
