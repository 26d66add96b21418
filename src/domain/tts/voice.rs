use std::fmt;
use std::str::FromStr;

/// Relative speaking rate, expressed as a signed percentage offset from the
/// provider's default speed ("-15%" speaks 15% slower, "+10%" 10% faster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpeechRate(i8);

impl SpeechRate {
    /// Slowest offset accepted; anything below would stop speech entirely.
    pub const MIN_OFFSET: i8 = -90;
    pub const MAX_OFFSET: i8 = 100;

    pub fn new(offset: i8) -> Result<Self, String> {
        if !(Self::MIN_OFFSET..=Self::MAX_OFFSET).contains(&offset) {
            return Err(format!(
                "speech rate offset {}% is outside {}%..+{}%",
                offset,
                Self::MIN_OFFSET,
                Self::MAX_OFFSET
            ));
        }
        Ok(Self(offset))
    }

    pub fn offset(&self) -> i8 {
        self.0
    }

    /// Rate as a percentage of normal speed (`-15%` -> `85`).
    pub fn as_percent_of_normal(&self) -> u16 {
        (100 + i16::from(self.0)) as u16
    }

    /// Rate as a speed multiplier (`-15%` -> `0.85`).
    pub fn as_multiplier(&self) -> f32 {
        1.0 + f32::from(self.0) / 100.0
    }
}

impl FromStr for SpeechRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix('%')
            .ok_or_else(|| format!("speech rate '{}' must end with '%'", s))?;
        let offset = number
            .trim()
            .parse::<i8>()
            .map_err(|_| format!("speech rate '{}' is not a whole percentage", s))?;
        Self::new(offset)
    }
}

impl fmt::Display for SpeechRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}%", self.0)
    }
}

/// Voice used for every item of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceConfig {
    pub voice: String,
    pub rate: SpeechRate,
}

impl VoiceConfig {
    pub fn new(voice: impl Into<String>, rate: SpeechRate) -> Self {
        Self {
            voice: voice.into(),
            rate,
        }
    }
}

impl fmt::Display for VoiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.voice, self.rate)
    }
}
