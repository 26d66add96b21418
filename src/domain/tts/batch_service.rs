use super::error::TtsError;
use super::filename::FilenamePolicy;
use super::synthesizer::SpeechSynthesizer;
use super::voice::VoiceConfig;
use crate::infrastructure::repositories::{AudioCacheRepository, VocabularyRepository};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Settings for one batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub voice: VoiceConfig,
    pub max_filename_length: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub word: String,
    pub error: String,
}

/// Per-word tallies of a batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub synthesized: Vec<PathBuf>,
    pub skipped_existing: usize,
    pub skipped_empty: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

enum ItemOutcome {
    Synthesized(PathBuf),
    AlreadyCached,
}

pub struct BatchService {
    vocabulary_repo: Arc<dyn VocabularyRepository>,
    cache: AudioCacheRepository,
    synthesizer: SpeechSynthesizer,
    config: BatchConfig,
}

impl BatchService {
    pub fn new(
        vocabulary_repo: Arc<dyn VocabularyRepository>,
        synthesizer: SpeechSynthesizer,
        config: BatchConfig,
    ) -> Self {
        Self {
            vocabulary_repo,
            cache: AudioCacheRepository::new(config.output_dir.clone()),
            synthesizer,
            config,
        }
    }
}

#[async_trait]
pub trait BatchServiceApi: Send + Sync {
    /// Generate one audio file per word in the first column of `source`
    ///
    /// Words are handled one at a time, in row order. A word whose file
    /// already exists is skipped; a word that fails is recorded in the report
    /// and the run moves on. Only an unreadable source fails the whole run.
    async fn process(&self, source: &Path) -> Result<BatchReport, TtsError>;
}

#[async_trait]
impl BatchServiceApi for BatchService {
    async fn process(&self, source: &Path) -> Result<BatchReport, TtsError> {
        let words = self
            .vocabulary_repo
            .first_column(source)
            .await
            .map_err(TtsError::SourceRead)?;

        self.cache.ensure_dir().await?;

        let mut report = BatchReport::default();
        let total = words.len();

        for (index, cell) in words.into_iter().enumerate() {
            let word = match cell {
                Some(word) if !word.is_empty() => word,
                _ => {
                    tracing::debug!(row = index, "Skipping empty cell");
                    report.skipped_empty += 1;
                    continue;
                }
            };

            match self.process_word(&word).await {
                Ok(ItemOutcome::Synthesized(path)) => report.synthesized.push(path),
                Ok(ItemOutcome::AlreadyCached) => report.skipped_existing += 1,
                Err(e) => {
                    tracing::error!(row = index, word = %word, error = %e, "Word failed, continuing");
                    report.failures.push(BatchFailure {
                        word,
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            rows = total,
            synthesized = report.synthesized.len(),
            skipped_existing = report.skipped_existing,
            skipped_empty = report.skipped_empty,
            failed = report.failures.len(),
            "Batch completed"
        );

        Ok(report)
    }
}

impl BatchService {
    async fn process_word(&self, word: &str) -> Result<ItemOutcome, TtsError> {
        let policy = FilenamePolicy::ReplaceAndTruncate {
            max_len: self.config.max_filename_length,
        };
        let key = policy.derive(word, None);
        let path = self.cache.path_for(&key);

        if self.cache.exists(&key).await? {
            tracing::info!(path = %path.display(), "File already exists, skipping");
            return Ok(ItemOutcome::AlreadyCached);
        }

        tracing::info!(word = %word, key = %key, "Generating audio");
        self.synthesizer
            .synthesize(word, &self.config.voice, &path)
            .await?;

        Ok(ItemOutcome::Synthesized(path))
    }
}
