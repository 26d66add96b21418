use super::error::TtsError;
use super::voice::VoiceConfig;
use crate::infrastructure::repositories::TtsRepository;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Turns text into an audio file through the configured TTS repository.
///
/// One attempt per call. The destination is only written once the provider
/// has returned audio.
#[derive(Clone)]
pub struct SpeechSynthesizer {
    tts_repo: Arc<dyn TtsRepository>,
    timeout: Option<Duration>,
}

impl SpeechSynthesizer {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, timeout: Option<Duration>) -> Self {
        Self { tts_repo, timeout }
    }

    pub async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceConfig,
        destination: &Path,
    ) -> Result<(), TtsError> {
        let request = self.tts_repo.synthesize(text, voice);

        let audio_data = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| {
                    TtsError::Synthesis(format!("no response within {:?}", limit))
                })?,
            None => request.await,
        }
        .map_err(TtsError::Synthesis)?;

        tokio::fs::write(destination, &audio_data)
            .await
            .map_err(|e| {
                TtsError::Synthesis(format!(
                    "failed to save audio to {}: {}",
                    destination.display(),
                    e
                ))
            })?;

        tracing::info!(
            destination = %destination.display(),
            audio_size = audio_data.len(),
            voice = %voice,
            "Audio saved"
        );

        Ok(())
    }
}
