pub mod batch_service;
pub mod error;
pub mod filename;
pub mod speak_service;
pub mod synthesizer;
pub mod voice;

pub use batch_service::{BatchConfig, BatchFailure, BatchReport, BatchService, BatchServiceApi};
pub use error::TtsError;
pub use filename::{FileKey, FilenamePolicy, PLACEHOLDER_KEY};
pub use speak_service::{SpeakConfig, SpeakOutcome, SpeakService, SpeakServiceApi};
pub use synthesizer::SpeechSynthesizer;
pub use voice::{SpeechRate, VoiceConfig};
