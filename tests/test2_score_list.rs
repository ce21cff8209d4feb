use chrono::NaiveDate;
use serde_json::json;

use junior_rankings::model::utils::format_date_for_score_view;
use junior_rankings::model::{Event, Round, Score, ScoreList, best_handicap_of};

fn persisted(id: &str, handicap: i32) -> Score {
    Score {
        id: Some(id.to_string()),
        temp_id: None,
        event: format!("Event {id}"),
        event_id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1),
        round: "Portsmouth".to_string(),
        round_codename: "portsmouth".to_string(),
        score: 500,
        handicap,
        verified: true,
    }
}

fn summer_shoot() -> (Event, Round) {
    let round = Round {
        codename: "windsor".to_string(),
        name: "Windsor".to_string(),
    };
    let event = Event {
        identifier: "7".to_string(),
        name: "Summer Shoot".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 7, 13),
        rounds: vec![round.clone()],
    };
    (event, round)
}

#[test]
fn test_best_handicap_needs_three_scores() {
    assert_eq!(best_handicap_of(&[]), None);
    assert_eq!(best_handicap_of(&[persisted("1", 10), persisted("2", 20)]), None);

    let list = ScoreList::from_persisted(vec![
        persisted("1", 40),
        persisted("2", 10),
        persisted("3", 30),
        persisted("4", 20),
    ]);
    // 10 + 20 + 30
    assert_eq!(list.best_handicap(), Some(60));
}

#[test]
fn test_persisted_scores_are_sorted_by_handicap() {
    let list = ScoreList::from_persisted(vec![
        persisted("a", 35),
        persisted("b", 12),
        persisted("c", 35),
        persisted("d", 20),
    ]);
    let ids: Vec<_> = list.scores().iter().filter_map(|s| s.id.clone()).collect();
    // ties keep their original order
    assert_eq!(ids, vec!["b", "d", "a", "c"]);
}

#[test]
fn test_add_assigns_increasing_temp_ids_and_sorts() {
    let (event, round) = summer_shoot();
    let mut list = ScoreList::from_persisted(vec![persisted("1", 10), persisted("2", 30)]);

    let first = list.add(Score::local(&event, &round, 900, 20));
    let second = list.add(Score::local(&event, &round, 950, 5));
    assert!(second > first);

    let handicaps: Vec<_> = list.scores().iter().map(|s| s.handicap).collect();
    assert_eq!(handicaps, vec![5, 10, 20, 30]);
    assert_eq!(list.scores()[0].removable_id(), Some(second));
    assert_eq!(list.unsaved().count(), 2);
    assert_eq!(list.best_handicap(), Some(35));
}

#[test]
fn test_add_then_remove_restores_the_list() {
    let (event, round) = summer_shoot();
    let original = ScoreList::from_persisted(vec![persisted("1", 10), persisted("2", 30)]);
    let mut list = original.clone();

    let temp_id = list.add(Score::local(&event, &round, 900, 12));
    assert_eq!(list.len(), 3);
    let removed = list.remove(temp_id).expect("score should be removable");
    assert_eq!(removed.score, 900);
    assert_eq!(list.scores(), original.scores());
}

#[test]
fn test_persisted_scores_cannot_be_removed() {
    let mut list = ScoreList::from_persisted(vec![persisted("1", 10)]);
    assert_eq!(list.scores()[0].removable_id(), None);
    assert!(list.remove(1).is_none());
    assert_eq!(list.len(), 1);
}

#[test]
fn test_score_deserializes_backend_shapes() {
    let score: Score = serde_json::from_value(json!({
        "id": 99,
        "event": "Club Open",
        "eventId": 4,
        "date": "2024-06-01T09:30:00Z",
        "round": "WA 70m",
        "roundCodename": "wa_70",
        "score": 600,
        "handicap": 24.6,
        "verified": false
    }))
    .expect("valid score");

    assert_eq!(score.id.as_deref(), Some("99"));
    assert_eq!(score.event_id, "4");
    assert_eq!(score.handicap, 25);
    assert_eq!(format_date_for_score_view(score.date), "Sat Jun 01 2024");
    assert_eq!(format_date_for_score_view(None), "Unknown date");
}

#[test]
fn test_imported_score_without_id_is_not_unsaved() {
    let imported: Score = serde_json::from_value(json!({
        "event": "County Champs",
        "eventId": 1,
        "date": "2024-05-04",
        "round": "Portsmouth",
        "score": 540,
        "handicap": 30
    }))
    .expect("valid score");
    assert!(imported.id.is_none());
    assert!(!imported.is_unsaved());
    assert_eq!(imported.removable_id(), None);

    let (event, round) = summer_shoot();
    let mut list = ScoreList::from_persisted(vec![imported]);
    assert_eq!(list.unsaved().count(), 0);
    let temp_id = list.add(Score::local(&event, &round, 900, 12));
    let unsaved: Vec<_> = list.unsaved().collect();
    assert_eq!(unsaved.len(), 1);
    assert_eq!(unsaved[0].removable_id(), Some(temp_id));
}
