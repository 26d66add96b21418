/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid arguments: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Cached audio is empty or corrupt: {0}")]
    CacheState(String),

    #[error("Cannot read word list: {0}")]
    SourceRead(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Input(_) => 1,
            Self::Config(_)
            | Self::Synthesis(_)
            | Self::CacheState(_)
            | Self::SourceRead(_)
            | Self::Io(_) => 2,
        }
    }

    /// Stage the failure belongs to, for log output
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Input(_) => "arguments",
            Self::Config(_) => "configuration",
            Self::Synthesis(_) => "synthesis",
            Self::CacheState(_) => "cache",
            Self::SourceRead(_) => "word list",
            Self::Io(_) => "filesystem",
        }
    }

    /// Log the error once at the process boundary
    pub fn report(&self) {
        tracing::error!(
            error = %self,
            stage = self.stage(),
            exit_code = self.exit_code(),
            "Run failed"
        );
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
