use crate::error::{CfResult, ColorForgeError};
use crate::geometry::ArrangementMode;
use crate::palette::Color;
use crate::record::ResultRecord;
use crate::scorer::Verdict;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

const LIST_SEPARATOR: &str = ", ";
/// Cell text for an empty color list, as the results log has always written it.
const EMPTY_LIST: &str = "None";
const TEXT_WRAP: usize = 90;

/// CSV projection of a [`ResultRecord`]; color lists are joined into one cell.
///
/// A missing source is written as an empty cell and an empty source reads back
/// as missing. Records built by [`ResultRecord::build`] never carry an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub mode: String,
    pub source: String,
    pub reference_order: String,
    pub detected_order: String,
    pub correct_count: usize,
    pub correct_colors: String,
    pub wrong_count: usize,
    pub accuracy: f64,
    pub duration_secs: Option<f64>,
    pub verdict: String,
}

impl From<&ResultRecord> for ResultRow {
    fn from(r: &ResultRecord) -> Self {
        Self {
            mode: r.mode.to_string(),
            source: r.source.clone().unwrap_or_default(),
            reference_order: join_colors(&r.reference_order),
            detected_order: join_colors(&r.detected_order),
            correct_count: r.correct_count,
            correct_colors: match r.correct_colors.as_slice() {
                [] => EMPTY_LIST.to_string(),
                colors => join_colors(colors),
            },
            wrong_count: r.wrong_count,
            accuracy: r.accuracy,
            duration_secs: r.duration_secs,
            verdict: r.verdict.to_string(),
        }
    }
}

impl TryFrom<ResultRow> for ResultRecord {
    type Error = ColorForgeError;

    fn try_from(row: ResultRow) -> CfResult<Self> {
        let mode = ArrangementMode::from_str(&row.mode)
            .map_err(|_| ColorForgeError::InputShape(format!("Unknown mode '{}'", row.mode)))?;
        let verdict = Verdict::from_str(&row.verdict)
            .map_err(|_| ColorForgeError::InputShape(format!("Unknown verdict '{}'", row.verdict)))?;

        Ok(ResultRecord {
            mode,
            reference_order: split_colors(&row.reference_order)?,
            detected_order: split_colors(&row.detected_order)?,
            correct_colors: split_colors(&row.correct_colors)?,
            correct_count: row.correct_count,
            wrong_count: row.wrong_count,
            accuracy: row.accuracy,
            verdict,
            source: Some(row.source).filter(|s| !s.is_empty()),
            duration_secs: row.duration_secs,
        })
    }
}

fn join_colors(colors: &[Color]) -> String {
    colors
        .iter()
        .map(Color::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn split_colors(cell: &str) -> CfResult<Vec<Color>> {
    if cell.trim().eq_ignore_ascii_case(EMPTY_LIST) {
        return Ok(Vec::new());
    }
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Color::from_str(s)
                .map_err(|_| ColorForgeError::InputShape(format!("Unknown color '{}'", s)))
        })
        .collect()
}

/// Appends one row to the results log, writing the header only for a new file.
pub fn append_csv<P: AsRef<Path>>(path: P, record: &ResultRecord) -> CfResult<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let is_new = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);
    wtr.serialize(ResultRow::from(record))?;
    wtr.flush()?;

    info!("Result appended to {}", path.display());
    Ok(())
}

pub fn read_csv<P: AsRef<Path>>(path: P) -> CfResult<Vec<ResultRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    rdr.deserialize::<ResultRow>()
        .map(|row| ResultRecord::try_from(row?))
        .collect()
}

pub fn write_json<P: AsRef<Path>>(path: P, record: &ResultRecord) -> CfResult<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    fs::write(path, serde_json::to_string_pretty(record)?)?;
    Ok(())
}

pub fn read_json<P: AsRef<Path>>(path: P) -> CfResult<ResultRecord> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Printable key/value report body. Long lines are hard-wrapped.
pub fn render_text(record: &ResultRecord) -> String {
    let correct = if record.correct_colors.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        join_colors(&record.correct_colors)
    };
    let duration = record
        .duration_secs
        .map(|d| format!("{:.2}", d))
        .unwrap_or_else(|| "-".to_string());

    let fields = [
        ("Arrangement Mode", record.mode.to_string()),
        ("Source", record.source.clone().unwrap_or_else(|| "-".to_string())),
        ("Generated Order", join_colors(&record.reference_order)),
        ("Detected Order", join_colors(&record.detected_order)),
        ("Correctly Placed", record.correct_count.to_string()),
        ("Correct Colors", correct),
        ("Wrongly Placed", record.wrong_count.to_string()),
        ("Accuracy (%)", format!("{:.2}", record.accuracy)),
        ("Time Taken (s)", duration),
        ("Result", record.verdict.to_string()),
    ];

    let mut out = String::new();
    for (key, value) in fields {
        let line = format!("{}: {}", key, value);
        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(TEXT_WRAP) {
            out.extend(chunk);
            out.push('\n');
        }
    }
    out
}

fn ensure_parent(path: &Path) -> CfResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
