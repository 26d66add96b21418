use crate::domain::tts::filename::{min_filename_length, DEFAULT_MAX_FILENAME_LENGTH};
use crate::domain::tts::{BatchConfig, SpeakConfig, SpeechRate, VoiceConfig};
use crate::error::AppError;
use serde::de::{value, DeserializeOwned, IntoDeserializer};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_VOICE: &str = "Remi";
const DEFAULT_SPEAK_RATE: &str = "-15%";
const DEFAULT_BATCH_RATE: &str = "-5%";

#[derive(Debug, Clone)]
pub struct Config {
    pub tts_provider: TtsProvider,
    pub aws_region: String,
    pub openai_model: String,
    pub speak: SpeakConfig,
    pub batch: BatchConfig,
    /// Client-side limit on one synthesis call; `None` waits for the provider
    pub synthesis_timeout: Option<Duration>,
    /// Word list to use instead of asking through the file dialog
    pub batch_source_path: Option<PathBuf>,
    /// Whether the first spreadsheet row is a column title
    pub batch_skip_header: bool,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    Polly,
    OpenAi,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let max_filename_length = parse_number::<usize>(
            "MAX_FILENAME_LENGTH",
            &var("MAX_FILENAME_LENGTH", &DEFAULT_MAX_FILENAME_LENGTH.to_string()),
        )?;
        if max_filename_length < min_filename_length() {
            return Err(AppError::Config(format!(
                "MAX_FILENAME_LENGTH must be at least {}, got {}",
                min_filename_length(),
                max_filename_length
            )));
        }

        let speak = SpeakConfig {
            output_dir: PathBuf::from(var("SPEAK_OUTPUT_DIR", "./output_voice")),
            voice: VoiceConfig::new(
                var("SPEAK_VOICE", DEFAULT_VOICE),
                parse_rate("SPEAK_RATE", &var("SPEAK_RATE", DEFAULT_SPEAK_RATE))?,
            ),
            max_filename_length,
        };

        let batch = BatchConfig {
            output_dir: PathBuf::from(var("BATCH_OUTPUT_DIR", "./output")),
            voice: VoiceConfig::new(
                var("BATCH_VOICE", DEFAULT_VOICE),
                parse_rate("BATCH_RATE", &var("BATCH_RATE", DEFAULT_BATCH_RATE))?,
            ),
            max_filename_length,
        };

        let synthesis_timeout = match lookup("SYNTHESIS_TIMEOUT_SECS") {
            Some(secs) => Some(Duration::from_secs(parse_number::<u64>(
                "SYNTHESIS_TIMEOUT_SECS",
                &secs,
            )?)),
            None => None,
        };

        let config = Config {
            tts_provider: parse_enum("TTS_PROVIDER", &var("TTS_PROVIDER", "polly"))?,
            aws_region: var("AWS_REGION", "eu-west-1"),
            openai_model: var("OPENAI_TTS_MODEL", "tts-1"),
            speak,
            batch,
            synthesis_timeout,
            batch_source_path: lookup("BATCH_SOURCE_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            batch_skip_header: lookup("BATCH_SKIP_HEADER")
                .map(|s| s.trim().to_lowercase() != "false")
                .unwrap_or(true),
            log_format: parse_enum("LOG_FORMAT", &var("LOG_FORMAT", "pretty"))?,
        };

        Ok(config)
    }
}

fn parse_enum<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, AppError> {
    let deserializer: value::StringDeserializer<value::Error> =
        raw.trim().to_lowercase().into_deserializer();
    T::deserialize(deserializer)
        .map_err(|e| AppError::Config(format!("{}: {}", key, e)))
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::Config(format!("{} must be a whole number, got '{}'", key, raw)))
}

fn parse_rate(key: &str, raw: &str) -> Result<SpeechRate, AppError> {
    raw.parse::<SpeechRate>()
        .map_err(|e| AppError::Config(format!("{}: {}", key, e)))
}
