use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Positions, palettes or hit vectors that do not have the shape the palette demands.
    #[error("Input Shape Error: {0}")]
    InputShape(String),

    #[error("Configuration Error: {0}")]
    Configuration(String),

    #[error("No reference order yet. Run a shuffle before analyzing.")]
    NoReference,

    #[error("No analysis result yet. Run an analysis first.")]
    NoResult,
}

pub type CfResult<T> = Result<T, ColorForgeError>;
