use crate::error::{CfResult, ColorForgeError};
use crate::geometry::{resolve, ArrangementMode, DetectedPositions, FrameSize};
use crate::palette::{Color, Palette, ReferenceOrder};
use crate::record::{correct_colors, CaptureInfo, ResultRecord};
use crate::scorer::{aggregate, compare};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoReferenceYet,
    ReferenceReady,
}

/// One player's challenge. Owns the reference order and the last result;
/// the scoring functions never touch it.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    palette: Palette,
    pub mode: ArrangementMode,
    reference: Option<ReferenceOrder>,
    #[serde(default)]
    last_result: Option<ResultRecord>,
}

impl Session {
    pub fn new(palette: Palette, mode: ArrangementMode) -> Self {
        Self {
            palette,
            mode,
            reference: None,
            last_result: None,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn state(&self) -> SessionState {
        match self.reference {
            Some(_) => SessionState::ReferenceReady,
            None => SessionState::NoReferenceYet,
        }
    }

    pub fn reference(&self) -> Option<&ReferenceOrder> {
        self.reference.as_ref()
    }

    pub fn last_result(&self) -> Option<&ResultRecord> {
        self.last_result.as_ref()
    }

    pub fn select_mode(&mut self, mode: ArrangementMode) {
        if mode != self.mode {
            info!("Arrangement mode switched: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Draws a fresh reference order, discarding the previous one and its result.
    pub fn shuffle(&mut self, rng: &mut Rng) -> &ReferenceOrder {
        let order = ReferenceOrder::shuffled(&self.palette, rng);
        debug!("New reference order: {:?}", order.colors());
        self.last_result = None;
        self.reference.insert(order)
    }

    /// Installs a known reference order, e.g. when replaying a recorded challenge.
    pub fn set_reference(&mut self, order: ReferenceOrder) -> CfResult<()> {
        let checked = ReferenceOrder::from_colors(&self.palette, order.colors().to_vec())?;
        self.last_result = None;
        self.reference = Some(checked);
        Ok(())
    }

    /// Scores one frame's detections against the current reference.
    pub fn analyze(
        &mut self,
        positions: &DetectedPositions,
        frame: Option<FrameSize>,
        capture: CaptureInfo,
    ) -> CfResult<ResultRecord> {
        let reference = self.reference.as_ref().ok_or(ColorForgeError::NoReference)?;

        let detected = resolve(&self.palette, positions, self.mode, frame)?;
        let hits = compare(reference.colors(), &detected)?;
        let summary = aggregate(&hits, self.palette.len())?;
        let correct = correct_colors(reference.colors(), &hits);

        info!(
            "{} analysis: {}/{} placed correctly ({:.2}%)",
            self.mode,
            summary.correct_count,
            self.palette.len(),
            summary.accuracy
        );

        let record = ResultRecord::build(
            self.mode,
            reference.colors(),
            &detected,
            &hits,
            &summary,
            correct,
            capture,
        );
        self.last_result = Some(record.clone());
        Ok(record)
    }

    /// Reads a saved session. The reference must still be a permutation of the
    /// palette and a cached result must belong to that reference.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let file: SessionFile = serde_json::from_str(&content)?;
        Self::try_from(file)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> CfResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// On-disk shape of a [`Session`], before its invariants are checked.
#[derive(Deserialize)]
struct SessionFile {
    palette: Palette,
    mode: ArrangementMode,
    reference: Option<Vec<Color>>,
    #[serde(default)]
    last_result: Option<ResultRecord>,
}

impl TryFrom<SessionFile> for Session {
    type Error = ColorForgeError;

    fn try_from(file: SessionFile) -> CfResult<Self> {
        let reference = file
            .reference
            .map(|colors| ReferenceOrder::from_colors(&file.palette, colors))
            .transpose()?;

        if let Some(record) = &file.last_result {
            let matches = reference
                .as_ref()
                .is_some_and(|r| r.colors() == record.reference_order.as_slice());
            if !matches {
                return Err(ColorForgeError::InputShape(
                    "Cached result was scored against a different reference order".to_string(),
                ));
            }
        }

        Ok(Self {
            palette: file.palette,
            mode: file.mode,
            reference,
            last_result: file.last_result,
        })
    }
}
