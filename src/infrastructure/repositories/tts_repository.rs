use crate::domain::tts::VoiceConfig;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (AWS Polly, OpenAI, etc.)
///
/// Implementations are responsible for:
/// - Mapping the voice identifier onto the provider's voice model
/// - Applying the rate offset in whatever form the provider accepts
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech with the given voice
    ///
    /// Returns audio data ready for playback (MP3 format)
    ///
    /// # Errors
    /// Returns the provider's failure, unchanged and without retrying
    async fn synthesize(&self, text: &str, voice: &VoiceConfig) -> Result<Vec<u8>, String>;
}
