//! Audio capture settings value objects
//!
//! Codes follow the Android `MediaRecorder` numbering so preferences written
//! by either side stay interchangeable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidCode;

/// Where the audio comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AudioSource {
    Default,
    Mic,
    VoiceUplink,
    VoiceDownlink,
    VoiceCall,
    Camcorder,
    VoiceRecognition,
    VoiceCommunication,
}

impl AudioSource {
    pub const ALL: [Self; 8] = [
        Self::Default,
        Self::Mic,
        Self::VoiceUplink,
        Self::VoiceDownlink,
        Self::VoiceCall,
        Self::Camcorder,
        Self::VoiceRecognition,
        Self::VoiceCommunication,
    ];

    pub const fn code(&self) -> i32 {
        match self {
            Self::Default => 0,
            Self::Mic => 1,
            Self::VoiceUplink => 2,
            Self::VoiceDownlink => 3,
            Self::VoiceCall => 4,
            Self::Camcorder => 5,
            Self::VoiceRecognition => 6,
            Self::VoiceCommunication => 7,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Mic => "mic",
            Self::VoiceUplink => "voice-uplink",
            Self::VoiceDownlink => "voice-downlink",
            Self::VoiceCall => "voice-call",
            Self::Camcorder => "camcorder",
            Self::VoiceRecognition => "voice-recognition",
            Self::VoiceCommunication => "voice-communication",
        }
    }
}

impl TryFrom<i32> for AudioSource {
    type Error = InvalidCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(InvalidCode {
                kind: "audio source",
                code,
            })
    }
}

impl From<AudioSource> for i32 {
    fn from(source: AudioSource) -> Self {
        source.code()
    }
}

impl fmt::Display for AudioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Codec used to encode the captured audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AudioEncoder {
    Default,
    AmrNb,
    AmrWb,
    Aac,
    HeAac,
    AacEld,
    Vorbis,
    Opus,
}

impl AudioEncoder {
    pub const ALL: [Self; 8] = [
        Self::Default,
        Self::AmrNb,
        Self::AmrWb,
        Self::Aac,
        Self::HeAac,
        Self::AacEld,
        Self::Vorbis,
        Self::Opus,
    ];

    pub const fn code(&self) -> i32 {
        match self {
            Self::Default => 0,
            Self::AmrNb => 1,
            Self::AmrWb => 2,
            Self::Aac => 3,
            Self::HeAac => 4,
            Self::AacEld => 5,
            Self::Vorbis => 6,
            Self::Opus => 7,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AmrNb => "amr-nb",
            Self::AmrWb => "amr-wb",
            Self::Aac => "aac",
            Self::HeAac => "he-aac",
            Self::AacEld => "aac-eld",
            Self::Vorbis => "vorbis",
            Self::Opus => "opus",
        }
    }
}

impl TryFrom<i32> for AudioEncoder {
    type Error = InvalidCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|e| e.code() == code)
            .ok_or(InvalidCode {
                kind: "audio encoder",
                code,
            })
    }
}

impl From<AudioEncoder> for i32 {
    fn from(encoder: AudioEncoder) -> Self {
        encoder.code()
    }
}

impl fmt::Display for AudioEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Container format of the recording file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum OutputFormat {
    Default,
    ThreeGpp,
    Mpeg4,
    AmrNb,
    AmrWb,
    AacAdts,
    Webm,
    Ogg,
}

impl OutputFormat {
    pub const ALL: [Self; 8] = [
        Self::Default,
        Self::ThreeGpp,
        Self::Mpeg4,
        Self::AmrNb,
        Self::AmrWb,
        Self::AacAdts,
        Self::Webm,
        Self::Ogg,
    ];

    pub const fn code(&self) -> i32 {
        match self {
            Self::Default => 0,
            Self::ThreeGpp => 1,
            Self::Mpeg4 => 2,
            Self::AmrNb => 3,
            Self::AmrWb => 4,
            Self::AacAdts => 6,
            Self::Webm => 9,
            Self::Ogg => 11,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ThreeGpp => "3gpp",
            Self::Mpeg4 => "mpeg4",
            Self::AmrNb => "amr-nb",
            Self::AmrWb => "amr-wb",
            Self::AacAdts => "aac-adts",
            Self::Webm => "webm",
            Self::Ogg => "ogg",
        }
    }

    /// File extension for recordings in this format.
    /// Formats without a dedicated extension fall back to `.amr`.
    pub const fn file_suffix(&self) -> &'static str {
        match self {
            Self::AmrNb | Self::AmrWb => ".amr",
            Self::Mpeg4 => ".mp4",
            Self::ThreeGpp => ".3gp",
            _ => ".amr",
        }
    }
}

impl TryFrom<i32> for OutputFormat {
    type Error = InvalidCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|f| f.code() == code)
            .ok_or(InvalidCode {
                kind: "output format",
                code,
            })
    }
}

impl From<OutputFormat> for i32 {
    fn from(format: OutputFormat) -> Self {
        format.code()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_table() {
        assert_eq!(OutputFormat::AmrNb.file_suffix(), ".amr");
        assert_eq!(OutputFormat::AmrWb.file_suffix(), ".amr");
        assert_eq!(OutputFormat::Mpeg4.file_suffix(), ".mp4");
        assert_eq!(OutputFormat::ThreeGpp.file_suffix(), ".3gp");
        assert_eq!(OutputFormat::Default.file_suffix(), ".amr");
        assert_eq!(OutputFormat::Ogg.file_suffix(), ".amr");
    }

    #[test]
    fn codes_match_media_recorder() {
        assert_eq!(AudioSource::Mic.code(), 1);
        assert_eq!(AudioSource::VoiceCommunication.code(), 7);
        assert_eq!(AudioEncoder::AmrNb.code(), 1);
        assert_eq!(OutputFormat::AmrNb.code(), 3);
        assert_eq!(OutputFormat::Mpeg4.code(), 2);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let err = OutputFormat::try_from(5).unwrap_err();
        assert_eq!(err.code, 5);
        assert!(err.to_string().contains("output format"));
        assert!(AudioSource::try_from(42).is_err());
        assert!(AudioEncoder::try_from(-1).is_err());
    }

    #[test]
    fn known_codes_convert_back() {
        for source in AudioSource::ALL {
            assert_eq!(AudioSource::try_from(source.code()), Ok(source));
        }
        for encoder in AudioEncoder::ALL {
            assert_eq!(AudioEncoder::try_from(i32::from(encoder)), Ok(encoder));
        }
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::try_from(format.code()), Ok(format));
        }
    }
}
