use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use vocab_tts::domain::tts::{
    BatchConfig, BatchService, SpeakConfig, SpeakService, SpeechRate, SpeechSynthesizer,
    VoiceConfig,
};
use vocab_tts::infrastructure::audio::AudioPlayer;
use vocab_tts::infrastructure::repositories::{TtsRepository, VocabularyRepository};

pub mod fakes;

pub use fakes::{Event, EventLog, FakeAudioPlayer, FakeTtsRepository, FakeVocabulary};

pub struct TestContext {
    _tmp: TempDir,
    pub output_dir: PathBuf,
    pub events: Arc<EventLog>,
    pub tts_repo: Arc<FakeTtsRepository>,
    pub player: Arc<FakeAudioPlayer>,
}

impl TestContext {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let output_dir = tmp.path().join("output");
        let events = Arc::new(EventLog::default());

        Self {
            output_dir,
            tts_repo: Arc::new(FakeTtsRepository::new(events.clone())),
            player: Arc::new(FakeAudioPlayer::new(events.clone())),
            events,
            _tmp: tmp,
        }
    }

    pub fn speak_service(&self) -> SpeakService {
        let tts_repo: Arc<dyn TtsRepository> = self.tts_repo.clone();
        let player: Arc<dyn AudioPlayer> = self.player.clone();
        SpeakService::new(
            SpeechSynthesizer::new(tts_repo, None),
            player,
            SpeakConfig {
                output_dir: self.output_dir.clone(),
                voice: VoiceConfig::new("Remi", SpeechRate::new(-15).unwrap()),
                max_filename_length: 50,
            },
        )
    }

    pub fn batch_service(&self, words: &[Option<&str>]) -> BatchService {
        let tts_repo: Arc<dyn TtsRepository> = self.tts_repo.clone();
        let vocabulary: Arc<dyn VocabularyRepository> = Arc::new(FakeVocabulary::new(words));
        BatchService::new(
            vocabulary,
            SpeechSynthesizer::new(tts_repo, None),
            BatchConfig {
                output_dir: self.output_dir.clone(),
                voice: VoiceConfig::new("Remi", SpeechRate::new(-5).unwrap()),
                max_filename_length: 50,
            },
        )
    }

    pub fn audio_file(&self, key: &str) -> PathBuf {
        self.output_dir.join(format!("{}.mp3", key))
    }

    pub fn seed_audio(&self, key: &str, bytes: &[u8]) {
        std::fs::create_dir_all(&self.output_dir).unwrap();
        std::fs::write(self.audio_file(key), bytes).unwrap();
    }
}

/// Files in the output directory, sorted
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

pub fn assert_synthesized_before_played(events: &[Event], key: &str) {
    let file = format!("{}.mp3", key);
    let synth = events
        .iter()
        .position(|e| matches!(e, Event::Synthesized(_)))
        .expect("no synthesis happened");
    let play = events
        .iter()
        .position(|e| matches!(e, Event::Played(name) if *name == file))
        .expect("no playback happened");
    assert!(synth < play, "playback before synthesis: {:?}", events);
}
