use super::AudioPlayer;
use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Plays MP3 files on the default output device
pub struct RodioAudioPlayer {
    poll_interval: Duration,
}

impl RodioAudioPlayer {
    pub fn new() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Start playback on a blocking worker and return at once
    pub fn start(&self, path: &Path) -> PlaybackHandle {
        let path = path.to_path_buf();
        let poll_interval = self.poll_interval;

        PlaybackHandle::spawn(move |stop| play_blocking(&path, stop, poll_interval))
    }
}

impl Default for RodioAudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Running playback
pub struct PlaybackHandle {
    stop: Arc<AtomicBool>,
    done: oneshot::Receiver<Result<(), String>>,
}

impl PlaybackHandle {
    /// Run `work` on a blocking worker; it receives the stop flag to observe
    pub fn spawn<F>(work: F) -> Self
    where
        F: FnOnce(&AtomicBool) -> Result<(), String> + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        tokio::task::spawn_blocking(move || {
            let result = work(&stop_flag);
            // receiver gone means nobody waits for the outcome
            let _ = done_tx.send(result);
        });

        Self {
            stop,
            done: done_rx,
        }
    }

    /// Ask playback to end early; `finished` then resolves shortly after
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub async fn finished(self) -> Result<(), String> {
        self.done
            .await
            .map_err(|_| "playback worker exited without reporting".to_string())?
    }
}

fn play_blocking(path: &Path, stop: &AtomicBool, poll_interval: Duration) -> Result<(), String> {
    // OutputStream is !Send: it must live and die on this thread
    let (_stream, stream_handle) =
        OutputStream::try_default().map_err(|e| format!("no audio output device: {}", e))?;
    let sink = Sink::try_new(&stream_handle)
        .map_err(|e| format!("failed to open audio sink: {}", e))?;

    let file = File::open(path).map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| format!("failed to decode {}: {}", path.display(), e))?;

    tracing::debug!(path = %path.display(), "Playback started");
    sink.append(source);

    match wait_until_drained(|| sink.empty(), stop, poll_interval) {
        Drain::Finished => tracing::debug!(path = %path.display(), "Playback finished"),
        Drain::Stopped => {
            sink.stop();
            tracing::debug!(path = %path.display(), "Playback stopped");
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Drain {
    Finished,
    Stopped,
}

/// Poll until `is_drained` holds or the stop flag is raised
fn wait_until_drained(
    is_drained: impl Fn() -> bool,
    stop: &AtomicBool,
    poll_interval: Duration,
) -> Drain {
    while !is_drained() {
        if stop.load(Ordering::Relaxed) {
            return Drain::Stopped;
        }
        std::thread::sleep(poll_interval);
    }
    Drain::Finished
}

#[async_trait]
impl AudioPlayer for RodioAudioPlayer {
    async fn play(&self, path: &Path) -> Result<(), String> {
        self.start(path).finished().await
    }
}
