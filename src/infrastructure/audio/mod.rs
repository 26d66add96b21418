pub mod rodio_player;

pub use rodio_player::{PlaybackHandle, RodioAudioPlayer};

use async_trait::async_trait;
use std::path::Path;

/// Local audio output.
///
/// Callers check that the file exists and is non-empty before calling.
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play the file and resolve once playback has finished
    async fn play(&self, path: &Path) -> Result<(), String>;
}
