use colorforge::export::{append_csv, read_csv, read_json, render_text, write_json, ResultRow};
use colorforge::geometry::ArrangementMode;
use colorforge::palette::Color;
use colorforge::record::ResultRecord;
use colorforge::scorer::Verdict;
use std::fs;

use Color::{Blue, Green, Pink, Red, Violet, Yellow};

fn sample(accuracy: f64, correct: Vec<Color>, source: Option<&str>) -> ResultRecord {
    let correct_count = correct.len();
    ResultRecord {
        mode: ArrangementMode::Circular,
        reference_order: vec![Red, Blue, Green, Yellow, Pink, Violet],
        detected_order: vec![Blue, Red, Green, Yellow, Pink],
        correct_colors: correct,
        correct_count,
        wrong_count: 6 - correct_count,
        accuracy,
        verdict: if correct_count == 6 {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        },
        source: source.map(str::to_string),
        duration_secs: Some(7.25),
    }
}

#[test]
fn test_csv_appends_with_single_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("results.csv");

    let first = sample(50.0, vec![Green, Yellow, Pink], Some("clip.mp4"));
    let second = sample(0.0, vec![], None);
    let third = ResultRecord {
        duration_secs: None,
        ..sample(66.67, vec![Green, Yellow, Pink, Violet], Some("cam 2, take 3.mov"))
    };
    for record in [&first, &second, &third] {
        append_csv(&path, record).unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("reference_order").count(), 1);
    assert_eq!(content.lines().count(), 4);
    assert!(content.lines().nth(2).unwrap().contains(",None,"));
    assert!(content.lines().nth(3).unwrap().contains("66.67"));

    let back = read_csv(&path).unwrap();
    assert_eq!(back, vec![first, second, third]);
}

#[test]
fn test_row_flattens_lists() {
    let record = sample(50.0, vec![Green, Yellow, Pink], None);
    let row = ResultRow::from(&record);
    assert_eq!(row.correct_colors, "Green, Yellow, Pink");
    assert_eq!(row.detected_order, "Blue, Red, Green, Yellow, Pink");
    assert_eq!(row.mode, "Circular");
    assert_eq!(row.verdict, "Incorrect");

    let back = ResultRecord::try_from(row).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_row_with_unknown_color_is_rejected() {
    let mut row = ResultRow::from(&sample(0.0, vec![], None));
    row.detected_order = "Red, Orange".to_string();
    assert!(ResultRecord::try_from(row).is_err());
}

#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_result.json");
    let record = sample(66.67, vec![Green, Yellow, Pink, Violet], Some("take.mp4"));

    write_json(&path, &record).unwrap();
    assert_eq!(read_json(&path).unwrap(), record);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    for key in [
        "mode",
        "reference_order",
        "detected_order",
        "correct_colors",
        "correct_count",
        "wrong_count",
        "accuracy",
        "verdict",
    ] {
        assert!(raw.get(key).is_some(), "missing field {}", key);
    }
}

#[test]
fn test_text_report_lists_every_field() {
    let text = render_text(&sample(0.0, vec![], None));
    assert!(text.contains("Arrangement Mode: Circular"));
    assert!(text.contains("Correct Colors: None"));
    assert!(text.contains("Accuracy (%): 0.00"));
    assert!(text.contains("Time Taken (s): 7.25"));
    assert!(text.contains("Result: Incorrect"));
    assert!(text.lines().all(|l| l.chars().count() <= 90));
}

#[test]
fn test_empty_correct_list_reads_back_from_none_cell() {
    let row = ResultRow::from(&sample(0.0, vec![], None));
    assert_eq!(row.correct_colors, "None");
    assert_eq!(row.source, "");

    let back = ResultRecord::try_from(row).unwrap();
    assert!(back.correct_colors.is_empty());
    assert_eq!(back.source, None);
}
