use crate::reports;
use clap::Args;
use colorforge::config::ChallengeConfig;
use colorforge::error::{CfResult, ColorForgeError};
use colorforge::export;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: ChallengeConfig,

    /// Also export the result as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Also write the printable text report
    #[arg(long)]
    pub text: Option<PathBuf>,
}

pub fn run(args: ReportArgs, config: &ChallengeConfig, session_path: &Path) -> CfResult<()> {
    // The session is authoritative: a shuffle clears its cache, and the
    // exported JSON may belong to a discarded reference.
    let record = if session_path.exists() {
        super::load_session(session_path)?
            .last_result()
            .cloned()
            .ok_or(ColorForgeError::NoResult)?
    } else {
        let fallback = config.last_result_path();
        if !fallback.exists() {
            return Err(ColorForgeError::NoResult);
        }
        export::read_json(fallback)?
    };

    let body = export::render_text(&record);
    println!("\n🎨 Color Arrangement Challenge Report\n\n{}", body);
    reports::print_summary(&record);

    if let Some(path) = args.json {
        export::write_json(&path, &record)?;
        info!("JSON saved to {}", path.display());
    }
    if let Some(path) = args.text {
        fs::write(&path, &body)?;
        info!("Report saved to {}", path.display());
    }
    Ok(())
}
