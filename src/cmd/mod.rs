pub mod analyze;
pub mod report;
pub mod shuffle;

use colorforge::error::{CfResult, ColorForgeError};
use colorforge::session::Session;
use std::path::Path;

/// Loads the persisted session, treating a missing file as "never shuffled".
pub fn load_session(path: &Path) -> CfResult<Session> {
    if !path.exists() {
        return Err(ColorForgeError::NoReference);
    }
    Session::load_from_file(path)
}
