use colorforge::error::ColorForgeError;
use colorforge::geometry::{resolve, ArrangementMode, DetectedPositions, Point};
use colorforge::palette::{Color, Palette};
use colorforge::record::{correct_colors, CaptureInfo, ResultRecord};
use colorforge::scorer::{aggregate, compare, Verdict};
use rstest::rstest;

use Color::{Blue, Green, Pink, Red, Violet, Yellow};

const REFERENCE: [Color; 6] = [Red, Blue, Green, Yellow, Pink, Violet];

fn score(detected: &[Color]) -> (Vec<bool>, colorforge::scorer::ScoreSummary) {
    let hits = compare(&REFERENCE, detected).unwrap();
    let summary = aggregate(&hits, REFERENCE.len()).unwrap();
    (hits, summary)
}

#[test]
fn test_perfect_linear_arrangement() {
    let pos: DetectedPositions = REFERENCE
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, Some(Point::new(50 + 100 * i as i32, 240))))
        .collect();
    let detected = resolve(&Palette::standard(), &pos, ArrangementMode::Linear, None).unwrap();
    assert_eq!(detected, REFERENCE.to_vec());

    let (hits, summary) = score(&detected);
    assert!(hits.iter().all(|&h| h));
    assert_eq!(summary.accuracy, 100.0);
    assert_eq!(summary.verdict, Verdict::Correct);
    assert_eq!(summary.wrong_count, 0);
}

#[test]
fn test_first_two_swapped() {
    let (hits, summary) = score(&[Blue, Red, Green, Yellow, Pink, Violet]);
    assert_eq!(hits, vec![false, false, true, true, true, true]);
    assert_eq!(summary.correct_count, 4);
    assert_eq!(summary.wrong_count, 2);
    assert_eq!(summary.accuracy, 66.67);
    assert_eq!(summary.verdict, Verdict::Incorrect);
}

#[test]
fn test_missing_violet_forces_last_miss() {
    let pos: DetectedPositions = REFERENCE
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let p = (c != Violet).then(|| Point::new(10 * i as i32, 0));
            (c, p)
        })
        .collect();
    let detected = resolve(&Palette::standard(), &pos, ArrangementMode::Linear, None).unwrap();
    assert_eq!(detected.len(), 5);

    let (hits, summary) = score(&detected);
    assert_eq!(hits.len(), 6);
    assert_eq!(hits, vec![true, true, true, true, true, false]);
    assert_eq!(summary.accuracy, 83.33);
}

#[test]
fn test_nothing_detected_is_a_zero_result_not_an_error() {
    let (hits, summary) = score(&[]);
    assert_eq!(hits, vec![false; 6]);
    assert_eq!(summary.correct_count, 0);
    assert_eq!(summary.wrong_count, 6);
    assert_eq!(summary.accuracy, 0.0);
    assert_eq!(summary.verdict, Verdict::Incorrect);
}

#[test]
fn test_extra_detected_entries_are_ignored() {
    let reference = [Red, Blue];
    let hits = compare(&reference, &[Red, Blue, Green]).unwrap();
    assert_eq!(hits, vec![true, true]);
}

#[rstest]
#[case(0, 0.0)]
#[case(1, 16.67)]
#[case(2, 33.33)]
#[case(3, 50.0)]
#[case(4, 66.67)]
#[case(5, 83.33)]
#[case(6, 100.0)]
fn test_accuracy_for_six_colors(#[case] correct: usize, #[case] expected: f64) {
    let hits: Vec<bool> = (0..6).map(|i| i < correct).collect();
    let summary = aggregate(&hits, 6).unwrap();
    assert_eq!(summary.accuracy, expected);
    assert_eq!(summary.verdict == Verdict::Correct, correct == 6);
}

#[rstest]
#[case(1, 32, 3.13)] // 3.125
#[case(3, 32, 9.38)] // 9.375
#[case(5, 32, 15.63)] // 15.625
#[case(1, 8, 12.5)]
fn test_accuracy_rounds_half_up(#[case] correct: usize, #[case] size: usize, #[case] expected: f64) {
    let hits: Vec<bool> = (0..size).map(|i| i < correct).collect();
    assert_eq!(aggregate(&hits, size).unwrap().accuracy, expected);
}

#[test]
fn test_aggregate_length_mismatch() {
    let err = aggregate(&[true, true, false], 6).unwrap_err();
    assert!(matches!(err, ColorForgeError::InputShape(_)));
}

#[test]
fn test_scoring_is_idempotent() {
    let detected = [Green, Red, Blue, Yellow, Violet, Pink];
    assert_eq!(score(&detected), score(&detected));
}

#[test]
fn test_record_assembly() {
    let detected = [Blue, Red, Green, Yellow, Pink];
    let (hits, summary) = score(&detected);
    let correct = correct_colors(&REFERENCE, &hits);
    let record = ResultRecord::build(
        ArrangementMode::Linear,
        &REFERENCE,
        &detected,
        &hits,
        &summary,
        correct,
        CaptureInfo {
            source: Some("take_03.mp4".to_string()),
            duration_secs: Some(12.5),
        },
    );

    assert_eq!(record.correct_colors, vec![Green, Yellow, Pink]);
    assert_eq!(record.correct_count, 3);
    assert_eq!(record.wrong_count, 3);
    assert_eq!(record.accuracy, 50.0);
    assert_eq!(record.verdict, Verdict::Incorrect);
    assert_eq!(record.source.as_deref(), Some("take_03.mp4"));
    assert_eq!(record.summary(), summary);
}

#[test]
fn test_record_drops_blank_source() {
    let (hits, summary) = score(&REFERENCE);
    let record = ResultRecord::build(
        ArrangementMode::Linear,
        &REFERENCE,
        &REFERENCE,
        &hits,
        &summary,
        correct_colors(&REFERENCE, &hits),
        CaptureInfo {
            source: Some("  ".to_string()),
            duration_secs: None,
        },
    );
    assert_eq!(record.source, None);
    assert_eq!(record.duration_secs, None);
}
