use std::sync::Arc;

use crate::{
    domain::tts::{SpeakOutcome, SpeakServiceApi},
    error::{AppError, AppResult},
};

/// Positional arguments of `vocab-tts <text> <filename>`
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakArgs {
    pub text: String,
    pub filename: String,
}

impl SpeakArgs {
    /// Exactly two arguments, program name excluded
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        match (args.next(), args.next(), args.next()) {
            (Some(text), Some(filename), None) => Ok(Self { text, filename }),
            _ => Err(AppError::Input(
                "usage: vocab-tts <text> <filename>".to_string(),
            )),
        }
    }
}

pub struct SpeakController {
    speak_service: Arc<dyn SpeakServiceApi>,
}

impl SpeakController {
    pub fn new(speak_service: Arc<dyn SpeakServiceApi>) -> Self {
        Self { speak_service }
    }

    /// Speak the text, caching the audio under the requested file name
    pub async fn speak(&self, args: SpeakArgs) -> AppResult<SpeakOutcome> {
        let outcome = self
            .speak_service
            .speak(&args.text, Some(&args.filename))
            .await?;

        tracing::info!(
            path = %outcome.path.display(),
            synthesized = outcome.synthesized,
            played = outcome.played,
            "Done"
        );

        Ok(outcome)
    }
}
