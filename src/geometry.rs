use crate::error::{CfResult, ColorForgeError};
use crate::palette::{Color, Palette};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Fixed offset of the circular clock frame. Recorded expectations depend on it.
pub const CIRCULAR_CALIBRATION_DEG: f64 = 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: i32,
    pub height: i32,
}

impl FrameSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Integer center, matching the localizer's pixel convention.
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(ascii_case_insensitive)]
pub enum ArrangementMode {
    Linear,
    Circular,
}

/// Localizer output: every palette color maps to a centroid or to `None` (not found).
pub type DetectedPositions = HashMap<Color, Option<Point>>;

/// Ranks the present entries of `positions` into a detected order.
///
/// Absent colors are dropped rather than ranked. Ties keep palette order.
pub fn resolve(
    palette: &Palette,
    positions: &DetectedPositions,
    mode: ArrangementMode,
    frame: Option<FrameSize>,
) -> CfResult<Vec<Color>> {
    check_coverage(palette, positions)?;

    let present: Vec<(Color, Point)> = palette
        .colors()
        .iter()
        .filter_map(|c| positions.get(c).copied().flatten().map(|p| (*c, p)))
        .collect();

    match mode {
        ArrangementMode::Linear => Ok(rank_linear(present)),
        ArrangementMode::Circular => {
            let frame = validate_frame(frame)?;
            Ok(rank_circular(present, frame))
        }
    }
}

fn check_coverage(palette: &Palette, positions: &DetectedPositions) -> CfResult<()> {
    if let Some(missing) = palette.colors().iter().find(|&c| !positions.contains_key(c)) {
        return Err(ColorForgeError::InputShape(format!(
            "Detected positions do not mention '{}'",
            missing
        )));
    }
    if let Some(stray) = positions.keys().find(|c| !palette.contains(**c)) {
        return Err(ColorForgeError::InputShape(format!(
            "Detected positions mention '{}' which is not in the palette",
            stray
        )));
    }
    Ok(())
}

fn validate_frame(frame: Option<FrameSize>) -> CfResult<FrameSize> {
    match frame {
        Some(f) if f.width > 0 && f.height > 0 => Ok(f),
        Some(f) => Err(ColorForgeError::Configuration(format!(
            "Circular mode needs a positive frame size, got {}x{}",
            f.width, f.height
        ))),
        None => Err(ColorForgeError::Configuration(
            "Circular mode needs the frame size".to_string(),
        )),
    }
}

fn rank_linear(mut present: Vec<(Color, Point)>) -> Vec<Color> {
    // sort_by_key is stable, so equal x keeps palette order.
    present.sort_by_key(|(_, p)| p.x);
    present.into_iter().map(|(c, _)| c).collect()
}

fn rank_circular(present: Vec<(Color, Point)>, frame: FrameSize) -> Vec<Color> {
    let mut angled: Vec<(f64, Color)> = present
        .into_iter()
        .map(|(c, p)| (clock_angle(p, frame), c))
        .collect();
    angled.sort_by(|a, b| a.0.total_cmp(&b.0));
    angled.into_iter().map(|(_, c)| c).collect()
}

/// Calibrated clockwise angle of `point` around the frame center, in `[0, 360)`.
pub fn clock_angle(point: Point, frame: FrameSize) -> f64 {
    let (cx, cy) = frame.center();
    let dx = i64::from(point.x) - i64::from(cx);
    let dy = i64::from(cy) - i64::from(point.y);

    // Negate in integer space so a zero dy never becomes -0.0.
    let angle_deg = (dx as f64).atan2((-dy) as f64).to_degrees();
    (360.0 - (angle_deg - CIRCULAR_CALIBRATION_DEG)).rem_euclid(360.0)
}

/// Converts a calibrated angle into a bearing clockwise from 12 o'clock, in degrees.
///
/// The calibrated zero lands at 300° (10 o'clock).
pub fn clock_face_bearing(angle: f64) -> f64 {
    (180.0 - CIRCULAR_CALIBRATION_DEG + angle).rem_euclid(360.0)
}
