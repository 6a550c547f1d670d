use crate::reports;
use clap::Args;
use colorforge::config::ChallengeConfig;
use colorforge::error::{CfResult, ColorForgeError};
use colorforge::geometry::ArrangementMode;
use colorforge::session::Session;
use std::path::Path;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ShuffleArgs {
    #[command(flatten)]
    pub config: ChallengeConfig,

    /// Arrangement topology; required for a fresh session
    #[arg(short, long, value_enum)]
    pub mode: Option<ArrangementMode>,
}

pub fn run(args: ShuffleArgs, config: &ChallengeConfig, session_path: &Path) -> CfResult<()> {
    let palette = config.palette()?;

    let existing = if session_path.exists() {
        match Session::load_from_file(session_path) {
            Ok(s) if *s.palette() == palette => Some(s),
            Ok(_) => {
                warn!("Palette changed; starting a new session");
                None
            }
            Err(e) => {
                warn!("Could not read session {}: {}", session_path.display(), e);
                None
            }
        }
    } else {
        None
    };

    let mut session = match (existing, args.mode) {
        (Some(mut s), Some(mode)) => {
            s.select_mode(mode);
            s
        }
        (Some(s), None) => s,
        (None, Some(mode)) => Session::new(palette, mode),
        (None, None) => {
            return Err(ColorForgeError::Configuration(
                "Choose an arrangement with --mode linear|circular first".to_string(),
            ))
        }
    };

    let mut rng = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let mode = session.mode;
    let order = session.shuffle(&mut rng).colors().to_vec();
    session.save_to_file(session_path)?;

    info!("🌀 {} color order generated", mode);
    reports::print_reference(&order, mode);
    Ok(())
}
