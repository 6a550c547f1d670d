use crate::reports;
use clap::Args;
use colorforge::config::ChallengeConfig;
use colorforge::error::CfResult;
use colorforge::export;
use colorforge::geometry::ArrangementMode;
use colorforge::localizer::{ColorLocalizer, DetectionFile, FrameSource};
use colorforge::record::highlight_hints;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: ChallengeConfig,

    /// JSON detections for the representative frame
    #[arg(short, long)]
    pub detections: PathBuf,
}

pub fn run(args: AnalyzeArgs, config: &ChallengeConfig, session_path: &Path) -> CfResult<()> {
    let mut session = super::load_session(session_path)?;

    info!("📂 Loading detections: {}", args.detections.display());
    let detections = DetectionFile::load_from_file(&args.detections)?;
    let positions = detections.locate(session.palette())?;

    let frame = match session.mode {
        ArrangementMode::Circular => Some(detections.frame_size()?),
        ArrangementMode::Linear => detections.frame,
    };

    let record = session.analyze(&positions, frame, detections.capture_info())?;

    reports::print_reference(&record.reference_order, record.mode);
    reports::print_comparison(&record);
    reports::print_summary(&record);
    reports::print_highlights(&highlight_hints(&positions, &record));

    export::append_csv(config.results_path(), &record)?;
    export::write_json(config.last_result_path(), &record)?;
    session.save_to_file(session_path)?;

    info!("📊 Analysis complete. Output in {}", config.output_dir.display());
    Ok(())
}
