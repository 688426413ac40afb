use thiserror::Error;

/// Errors raised around the drawing core: parsing colors and loading configuration.
///
/// Stroke store operations themselves never fail; they degrade to no-ops.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Unknown palette color: {0}")]
    UnknownColor(String),

    #[error("Invalid board configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Stroke width must be a positive finite number, got {0}")]
    InvalidStrokeWidth(f32),
}

/// Result type for fallible board operations
pub type BoardResult<T> = Result<T, BoardError>;
