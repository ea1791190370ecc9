use kirchenjahr::models::{BibleText, ComponentType, MoveDirection, ServiceComponent, ServicePlan, Settings};
use kirchenjahr::service::{
    add_component, estimate_duration_minutes, move_component, musician_list, remove_component,
    reorder, set_manual_duration, summarize, total_duration_minutes, update_component_content,
    Celebration,
};

fn assert_contiguous(components: &[ServiceComponent]) {
    let positions: Vec<usize> = components.iter().map(|c| c.order_position).collect();
    let expected: Vec<usize> = (0..components.len()).collect();
    assert_eq!(positions, expected);
}

fn words(n: usize) -> String {
    vec!["Gnade"; n].join(" ")
}

fn sunday_service() -> Vec<ServiceComponent> {
    let mut list = Vec::new();
    for component_type in [
        ComponentType::Votum,
        ComponentType::Lied,
        ComponentType::Eingangsgebet,
        ComponentType::Evangelium,
        ComponentType::Lied,
        ComponentType::Predigt,
        ComponentType::Fuerbitten,
        ComponentType::VaterUnser,
        ComponentType::Segen,
    ] {
        list = add_component(&list, component_type);
        assert_contiguous(&list);
    }
    list
}

#[test]
fn test_editing_session_keeps_positions_contiguous() {
    let settings = Settings::default();
    let mut list = sunday_service();

    list = move_component(&list, 3, MoveDirection::Up);
    assert_contiguous(&list);
    list = reorder(&list, 0, 8);
    assert_contiguous(&list);
    list = remove_component(&list, 4);
    assert_contiguous(&list);
    list = update_component_content(&list, 2, Some(words(300)), &settings);
    assert_contiguous(&list);
    list = set_manual_duration(&list, 1, Some(6));
    assert_contiguous(&list);
    list = add_component(&list, ComponentType::Abkuendigungen);
    assert_contiguous(&list);

    assert_eq!(list.len(), 9);
    assert_eq!(list.last().unwrap().component_type, ComponentType::Abkuendigungen);
}

#[test]
fn test_total_duration_of_default_service() {
    let list = sunday_service();
    // 1 + 4 + 2 + 3 + 4 + 15 + 3 + 1 + 1
    assert_eq!(total_duration_minutes(&list, 110), 34);
}

#[test]
fn test_sermon_text_drives_total_until_overridden() {
    let settings = Settings::default();
    let list = sunday_service();
    let sermon = 5;

    let list = update_component_content(&list, sermon, Some(words(1320)), &settings);
    assert_eq!(list[sermon].duration_minutes, Some(12));
    assert_eq!(total_duration_minutes(&list, 110), 34 - 15 + 12);

    let list = set_manual_duration(&list, sermon, Some(20));
    let list = update_component_content(&list, sermon, Some(words(110)), &settings);
    assert_eq!(list[sermon].duration_minutes, Some(20));
    assert_eq!(estimate_duration_minutes(&words(110), 110), 1);
}

#[test]
fn test_calculated_total_counts_text_and_scripture() {
    let settings = Settings::default();
    let mut list = sunday_service();
    list = update_component_content(&list, 0, Some(words(55)), &settings);
    list[3].bible_reference = Some("Joh 3,16-18".to_string());
    list[3].bible_text = Some(
        BibleText::from_json(&format!(
            r#"{{"translation":"LUT","verses":[{{"number":16,"text":"{}"}}]}}"#,
            words(110)
        ))
        .unwrap(),
    );

    let summary = summarize(&list, settings.words_per_minute);
    assert_eq!(summary.calculated_seconds, 30 + 60);
    assert_eq!(summary.calculated_display(), "1:30");
    // Votum text takes 1 minute, same as its default.
    assert_eq!(summary.total_minutes, 34);
}

#[test]
fn test_plan_from_json_and_share_text() {
    let json = r#"{
        "title": "Erntedank",
        "date": "2025-10-05",
        "time": "10:00:00",
        "congregation_size": 80,
        "components": [
            {"id": "0b3c8f8e-3c1a-4c55-9a59-1f7a3e2b6a01", "type": "lied", "title": "Eingangslied",
             "hymn_number": "EG 508", "order_position": 0},
            {"id": "0b3c8f8e-3c1a-4c55-9a59-1f7a3e2b6a02", "type": "predigt", "title": "Predigt",
             "order_position": 1, "duration_minutes": 12},
            {"id": "0b3c8f8e-3c1a-4c55-9a59-1f7a3e2b6a03", "type": "segen", "title": "Segen",
             "order_position": 2}
        ]
    }"#;
    let plan: ServicePlan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.components.len(), 3);

    let text = musician_list(&plan, 110);
    assert!(text.contains("📅 05.10.2025 um 10:00"));
    assert!(text.contains("1. Eingangslied: EG 508"));
    assert!(text.ends_with("Gesamtdauer: ca. 17 Min"));
}

#[test]
fn test_celebration_walks_the_run_sheet() {
    let list = sunday_service();
    let mut celebration = Celebration::new(&list);
    let mut visited = vec![celebration.current().unwrap().component_type];
    while celebration.next() {
        visited.push(celebration.current().unwrap().component_type);
    }
    assert_eq!(visited.len(), list.len());
    assert_eq!(visited.last(), Some(&ComponentType::Segen));
    assert_eq!(celebration.remaining_minutes(110), 1);
}
