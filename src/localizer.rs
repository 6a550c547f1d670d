use crate::error::{CfResult, ColorForgeError};
use crate::geometry::{DetectedPositions, FrameSize, Point};
use crate::palette::{Color, Palette};
use crate::record::CaptureInfo;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Supplies the pixel size of the representative frame.
pub trait FrameSource {
    fn frame_size(&self) -> CfResult<FrameSize>;
}

/// Finds a centroid for each palette color, or reports it as absent.
pub trait ColorLocalizer {
    fn locate(&self, palette: &Palette) -> CfResult<DetectedPositions>;
}

/// Detections exported by an upstream blob detector for a single frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionFile {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<f64>,
    #[serde(default)]
    pub frame: Option<FrameSize>,
    /// Keyed by color name as the detector spelled it; matched case-insensitively.
    pub positions: HashMap<String, Option<(i32, i32)>>,
}

impl DetectionFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        debug!("Reading detections from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn capture_info(&self) -> CaptureInfo {
        CaptureInfo {
            source: self.source.clone(),
            duration_secs: self.duration_secs,
        }
    }
}

impl FrameSource for DetectionFile {
    fn frame_size(&self) -> CfResult<FrameSize> {
        self.frame.ok_or_else(|| {
            ColorForgeError::Configuration("Detection file carries no frame size".to_string())
        })
    }
}

impl DetectionFile {
    /// Parses the detector's keys into palette colors. Unknown names, colors
    /// outside the palette and repeated spellings are skipped with a warning.
    fn palette_entries(&self, palette: &Palette) -> HashMap<Color, Option<(i32, i32)>> {
        let mut keys: Vec<&String> = self.positions.keys().collect();
        keys.sort();

        let mut entries = HashMap::new();
        for key in keys {
            let color = match Color::from_str(key.trim()) {
                Ok(c) => c,
                Err(_) => {
                    warn!("Ignoring detection for '{}': unknown color name", key);
                    continue;
                }
            };
            if !palette.contains(color) {
                warn!("Ignoring detection for '{}': not part of the palette", key);
                continue;
            }
            if entries.contains_key(&color) {
                warn!("Ignoring detection for '{}': {} was already given", key, color);
                continue;
            }
            entries.insert(color, self.positions[key]);
        }
        entries
    }
}

impl ColorLocalizer for DetectionFile {
    fn locate(&self, palette: &Palette) -> CfResult<DetectedPositions> {
        let entries = self.palette_entries(palette);

        Ok(palette
            .colors()
            .iter()
            .map(|&color| {
                let pos = entries
                    .get(&color)
                    .copied()
                    .flatten()
                    .map(|(x, y)| Point::new(x, y));
                if pos.is_none() {
                    debug!("{} not found in frame", color);
                }
                (color, pos)
            })
            .collect())
    }
}
