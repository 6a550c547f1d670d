use crate::geometry::{ArrangementMode, DetectedPositions, Point};
use crate::palette::Color;
use crate::scorer::{ScoreSummary, Verdict};
use serde::{Deserialize, Serialize};

/// Optional facts about the clip the frame was taken from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureInfo {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<f64>,
}

/// Flat outcome of one analysis, handed to reporting as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub mode: ArrangementMode,
    pub reference_order: Vec<Color>,
    pub detected_order: Vec<Color>,
    pub correct_colors: Vec<Color>,
    pub correct_count: usize,
    pub wrong_count: usize,
    pub accuracy: f64,
    pub verdict: Verdict,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<f64>,
}

impl ResultRecord {
    /// Assembles the record. Upstream stages guarantee consistency, so a
    /// mismatch here is a bug and panics.
    pub fn build(
        mode: ArrangementMode,
        reference: &[Color],
        detected: &[Color],
        hits: &[bool],
        summary: &ScoreSummary,
        correct_colors: Vec<Color>,
        capture: CaptureInfo,
    ) -> Self {
        assert_eq!(
            hits.len(),
            reference.len(),
            "hits must cover every reference slot"
        );
        assert_eq!(
            correct_colors.len(),
            summary.correct_count,
            "correct color list disagrees with summary"
        );
        assert_eq!(
            summary.correct_count + summary.wrong_count,
            reference.len(),
            "summary counts do not add up to the palette size"
        );

        Self {
            mode,
            reference_order: reference.to_vec(),
            detected_order: detected.to_vec(),
            correct_colors,
            correct_count: summary.correct_count,
            wrong_count: summary.wrong_count,
            accuracy: summary.accuracy,
            verdict: summary.verdict,
            source: capture.source.filter(|s| !s.trim().is_empty()),
            duration_secs: capture.duration_secs,
        }
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            correct_count: self.correct_count,
            wrong_count: self.wrong_count,
            accuracy: self.accuracy,
            verdict: self.verdict,
        }
    }

    pub fn is_correctly_placed(&self, color: Color) -> bool {
        self.correct_colors.contains(&color)
    }
}

/// Reference colors sitting at hit indices, in reference order.
pub fn correct_colors(reference: &[Color], hits: &[bool]) -> Vec<Color> {
    reference
        .iter()
        .zip(hits)
        .filter(|(_, hit)| **hit)
        .map(|(&c, _)| c)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementHint {
    pub color: Color,
    pub position: Point,
    pub correct: bool,
}

/// Per-marker highlight flags for renderers. Follows the record's reference order.
pub fn highlight_hints(positions: &DetectedPositions, record: &ResultRecord) -> Vec<PlacementHint> {
    record
        .reference_order
        .iter()
        .filter_map(|&color| {
            positions
                .get(&color)
                .copied()
                .flatten()
                .map(|position| PlacementHint {
                    color,
                    position,
                    correct: record.is_correctly_placed(color),
                })
        })
        .collect()
}
