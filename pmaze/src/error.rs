use pmaze_core::GenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generation(#[from] GenError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Settings(#[from] ron::error::SpannedError),
    #[error("JSON error: {0}")]
    Json(#[from] json5::Error),
    #[error("formatting error")]
    Fmt(#[from] std::fmt::Error),
    #[error("generated maze failed validation: {0}")]
    Validation(&'static str),
}
