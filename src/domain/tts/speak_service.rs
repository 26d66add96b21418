use super::error::TtsError;
use super::filename::{FileKey, FilenamePolicy};
use super::synthesizer::SpeechSynthesizer;
use super::voice::VoiceConfig;
use crate::infrastructure::audio::AudioPlayer;
use crate::infrastructure::repositories::{AudioCacheRepository, CacheEntry};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Settings for one single-text run
#[derive(Debug, Clone)]
pub struct SpeakConfig {
    pub output_dir: PathBuf,
    pub voice: VoiceConfig,
    pub max_filename_length: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeakOutcome {
    pub key: FileKey,
    pub path: PathBuf,
    /// False on a cache hit
    pub synthesized: bool,
    pub played: bool,
}

pub struct SpeakService {
    cache: AudioCacheRepository,
    synthesizer: SpeechSynthesizer,
    player: Arc<dyn AudioPlayer>,
    config: SpeakConfig,
}

impl SpeakService {
    pub fn new(
        synthesizer: SpeechSynthesizer,
        player: Arc<dyn AudioPlayer>,
        config: SpeakConfig,
    ) -> Self {
        Self {
            cache: AudioCacheRepository::new(config.output_dir.clone()),
            synthesizer,
            player,
            config,
        }
    }

    fn policy(&self) -> FilenamePolicy {
        FilenamePolicy::StripOrHash {
            max_len: self.config.max_filename_length,
        }
    }
}

#[async_trait]
pub trait SpeakServiceApi: Send + Sync {
    /// Say `text` out loud, synthesizing it first unless it is already cached
    ///
    /// This operation:
    /// - Derives the cache key from `filename` (or the text hash)
    /// - Synthesizes only on a cache miss
    /// - Plays the audio; playback problems are logged, not returned
    async fn speak(&self, text: &str, filename: Option<&str>) -> Result<SpeakOutcome, TtsError>;
}

#[async_trait]
impl SpeakServiceApi for SpeakService {
    async fn speak(&self, text: &str, filename: Option<&str>) -> Result<SpeakOutcome, TtsError> {
        let key = self.policy().derive(text, filename);
        self.cache.ensure_dir().await?;
        let path = self.cache.path_for(&key);

        tracing::info!(
            key = %key,
            path = %path.display(),
            text_length = text.chars().count(),
            "Speak request"
        );

        let synthesized = match self.cache.lookup(&key).await? {
            CacheEntry::Ready { size } => {
                tracing::info!(key = %key, cached_audio_size = size, "Cache hit - playing cached audio");
                false
            }
            CacheEntry::Empty => {
                tracing::error!(path = %path.display(), "Cached audio file is empty");
                return Err(TtsError::CacheState(path));
            }
            CacheEntry::Missing => {
                tracing::info!(key = %key, voice = %self.config.voice, "Cache miss - synthesizing");
                self.synthesizer
                    .synthesize(text, &self.config.voice, &path)
                    .await?;
                true
            }
        };

        let played = self.play(&path).await;

        Ok(SpeakOutcome {
            key,
            path,
            synthesized,
            played,
        })
    }
}

impl SpeakService {
    /// Play if the file is playable; never fails the run
    async fn play(&self, path: &Path) -> bool {
        match AudioCacheRepository::inspect(path).await {
            Ok(CacheEntry::Ready { .. }) => {}
            Ok(_) => {
                tracing::warn!(path = %path.display(), "Audio file is missing or empty, not playing");
                return false;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot inspect audio file, not playing");
                return false;
            }
        }

        match self.player.play(path).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Playback failed, continuing");
                false
            }
        }
    }
}
