use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use vocab_tts::domain::tts::VoiceConfig;
use vocab_tts::infrastructure::audio::AudioPlayer;
use vocab_tts::infrastructure::repositories::{TtsRepository, VocabularyRepository};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Text sent to the provider
    Synthesized(String),
    /// File name handed to the player
    Played(String),
}

#[derive(Default)]
pub struct EventLog(Mutex<Vec<Event>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn all(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub fn synthesized(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter_map(|e| match e {
                Event::Synthesized(text) => Some(text),
                Event::Played(_) => None,
            })
            .collect()
    }

    pub fn played(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter_map(|e| match e {
                Event::Played(name) => Some(name),
                Event::Synthesized(_) => None,
            })
            .collect()
    }
}

/// Returns `ID3` + the text as audio, or fails for configured texts
pub struct FakeTtsRepository {
    events: Arc<EventLog>,
    failing: Mutex<Vec<String>>,
}

impl FakeTtsRepository {
    pub fn new(events: Arc<EventLog>) -> Self {
        Self {
            events,
            failing: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_on(&self, text: &str) {
        self.failing.lock().unwrap().push(text.to_string());
    }
}

#[async_trait]
impl TtsRepository for FakeTtsRepository {
    async fn synthesize(&self, text: &str, _voice: &VoiceConfig) -> Result<Vec<u8>, String> {
        self.events.push(Event::Synthesized(text.to_string()));
        if self.failing.lock().unwrap().iter().any(|t| t == text) {
            return Err(format!("provider rejected '{}'", text));
        }
        let mut audio = b"ID3".to_vec();
        audio.extend_from_slice(text.as_bytes());
        Ok(audio)
    }
}

pub struct FakeAudioPlayer {
    events: Arc<EventLog>,
    broken: Mutex<bool>,
}

impl FakeAudioPlayer {
    pub fn new(events: Arc<EventLog>) -> Self {
        Self {
            events,
            broken: Mutex::new(false),
        }
    }

    pub fn break_device(&self) {
        *self.broken.lock().unwrap() = true;
    }
}

#[async_trait]
impl AudioPlayer for FakeAudioPlayer {
    async fn play(&self, path: &Path) -> Result<(), String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.events.push(Event::Played(name));
        if *self.broken.lock().unwrap() {
            Err("audio device unavailable".to_string())
        } else {
            Ok(())
        }
    }
}

pub struct FakeVocabulary {
    words: Vec<Option<String>>,
}

impl FakeVocabulary {
    pub fn new(words: &[Option<&str>]) -> Self {
        Self {
            words: words.iter().map(|w| w.map(str::to_string)).collect(),
        }
    }
}

#[async_trait]
impl VocabularyRepository for FakeVocabulary {
    async fn first_column(&self, _source: &Path) -> Result<Vec<Option<String>>, String> {
        Ok(self.words.clone())
    }
}
