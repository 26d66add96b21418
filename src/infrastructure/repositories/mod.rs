pub mod audio_cache_repository;
pub mod openai_tts_repository;
pub mod polly_tts_repository;
pub mod text_batches;
pub mod tts_repository;
pub mod vocabulary_repository;

pub use audio_cache_repository::{AudioCacheRepository, CacheEntry};
pub use openai_tts_repository::OpenAiTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use tts_repository::TtsRepository;
pub use vocabulary_repository::{ExcelVocabularyRepository, VocabularyRepository};

use crate::infrastructure::config::{Config, TtsProvider};
use std::sync::Arc;

/// Instantiate the configured cloud TTS provider
pub async fn create_tts_repository(config: &Config) -> Arc<dyn TtsRepository> {
    match config.tts_provider {
        TtsProvider::Polly => {
            tracing::info!(region = %config.aws_region, "Initializing AWS Polly client");

            let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
            let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
            if !has_access_key || !has_secret_key {
                tracing::debug!("AWS credentials not found in environment variables. Will attempt to use other credential providers");
            }

            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));

            Arc::new(PollyTtsRepository::new(polly_client))
        }
        TtsProvider::OpenAi => {
            tracing::info!(model = %config.openai_model, "Initializing OpenAI TTS client");
            let client = Arc::new(async_openai::Client::new());
            Arc::new(OpenAiTtsRepository::new(client, config.openai_model.clone()))
        }
    }
}
