use crate::error::AppError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
    #[error("cached audio file {} is empty", .0.display())]
    CacheState(PathBuf),
    #[error("cannot read word list: {0}")]
    SourceRead(String),
    #[error("output directory unavailable: {0}")]
    OutputDir(#[from] std::io::Error),
}

impl From<TtsError> for AppError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::Synthesis(msg) => AppError::Synthesis(msg),
            TtsError::CacheState(path) => AppError::CacheState(path.display().to_string()),
            TtsError::SourceRead(msg) => AppError::SourceRead(msg),
            TtsError::OutputDir(e) => AppError::Io(e),
        }
    }
}
