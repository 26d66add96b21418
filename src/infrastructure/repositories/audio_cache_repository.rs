use crate::domain::tts::FileKey;
use std::io;
use std::path::{Path, PathBuf};

const AUDIO_EXTENSION: &str = "mp3";

/// State of the cached file for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEntry {
    Missing,
    /// File exists but holds no audio
    Empty,
    Ready { size: u64 },
}

/// Flat directory of `<key>.mp3` files.
///
/// The file's presence is the only cache signal. Nothing records which text
/// or voice produced it, and concurrent processes writing the same key race.
#[derive(Debug, Clone)]
pub struct AudioCacheRepository {
    output_dir: PathBuf,
}

impl AudioCacheRepository {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory and its parents if needed
    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.output_dir).await
    }

    pub fn path_for(&self, key: &FileKey) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", key.as_str(), AUDIO_EXTENSION))
    }

    /// Plain existence check, size ignored. A file that cannot be checked is
    /// an error, never reported as absent.
    pub async fn exists(&self, key: &FileKey) -> io::Result<bool> {
        let path = self.path_for(key);
        tokio::fs::try_exists(&path).await.map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Cannot check cached audio file");
            e
        })
    }

    /// Existence plus size, for callers that are about to play the file
    pub async fn lookup(&self, key: &FileKey) -> io::Result<CacheEntry> {
        Self::inspect(&self.path_for(key)).await
    }

    pub async fn inspect(path: &Path) -> io::Result<CacheEntry> {
        match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.len() == 0 => Ok(CacheEntry::Empty),
            Ok(metadata) => Ok(CacheEntry::Ready {
                size: metadata.len(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(CacheEntry::Missing),
            Err(e) => Err(e),
        }
    }
}
