use super::types::{ScoreSummary, Verdict};
use crate::error::{CfResult, ColorForgeError};
use crate::palette::{first_duplicate, Color};

/// Position-by-position comparison of a detected order against the reference.
///
/// The result always has one entry per reference slot. Detected entries past
/// the end of the reference are ignored.
pub fn compare(reference: &[Color], detected: &[Color]) -> CfResult<Vec<bool>> {
    if let Some(dup) = first_duplicate(reference) {
        return Err(ColorForgeError::InputShape(format!(
            "Reference order repeats '{}'",
            dup
        )));
    }
    if let Some(dup) = first_duplicate(detected) {
        return Err(ColorForgeError::InputShape(format!(
            "Detected order repeats '{}'",
            dup
        )));
    }

    Ok(reference
        .iter()
        .enumerate()
        .map(|(i, want)| detected.get(i) == Some(want))
        .collect())
}

pub fn aggregate(hits: &[bool], palette_size: usize) -> CfResult<ScoreSummary> {
    if palette_size == 0 {
        return Err(ColorForgeError::Configuration(
            "Palette size must be positive".to_string(),
        ));
    }
    if hits.len() != palette_size {
        return Err(ColorForgeError::InputShape(format!(
            "Got {} comparison slots for a palette of {}",
            hits.len(),
            palette_size
        )));
    }

    let correct_count = hits.iter().filter(|&&h| h).count();
    let verdict = if correct_count == palette_size {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    };

    Ok(ScoreSummary {
        correct_count,
        wrong_count: palette_size - correct_count,
        accuracy: accuracy_percent(correct_count, palette_size),
        verdict,
    })
}

/// `correct / total * 100`, rounded half-up to two decimals.
///
/// Worked in integer hundredths of a percent so `.xx5` boundaries are exact.
pub fn accuracy_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let (correct, total) = (correct as u64, total as u64);
    let hundredths = (2 * correct * 10_000 + total) / (2 * total);
    hundredths as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_boundaries_round_half_up() {
        assert_eq!(accuracy_percent(1, 6), 16.67);
        assert_eq!(accuracy_percent(5, 6), 83.33);
        assert_eq!(accuracy_percent(1, 32), 3.13);
        assert_eq!(accuracy_percent(3, 32), 9.38);
        assert_eq!(accuracy_percent(6, 6), 100.0);
        assert_eq!(accuracy_percent(0, 6), 0.0);
    }

    #[test]
    fn compare_rejects_repeated_colors() {
        let reference = [Color::Red, Color::Blue];
        let detected = [Color::Red, Color::Red];
        assert!(matches!(
            compare(&reference, &detected),
            Err(ColorForgeError::InputShape(_))
        ));
    }

    #[test]
    fn aggregate_rejects_zero_palette() {
        assert!(matches!(
            aggregate(&[], 0),
            Err(ColorForgeError::Configuration(_))
        ));
    }
}
