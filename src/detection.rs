use std::num::IntErrorKind;

use serde::Serialize;

use crate::emotion::{Emotion, EmotionProfile};
use crate::scorer::ScoreResult;

/// Confidence assumed when a shared result carries none (or garbage).
pub const DEFAULT_SHARED_CONFIDENCE: u8 = 75;

/// A scored result together with the metadata the page needs to show it.
///
/// This is the value display and share code receive; nothing keeps a
/// "current" detection around on the crate side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Detection {
    pub emotion: Emotion,
    pub confidence: u8,
    #[serde(rename = "emotion_info")]
    pub profile: &'static EmotionProfile,
}

impl From<ScoreResult> for Detection {
    fn from(r: ScoreResult) -> Self {
        Self { emotion: r.emotion, confidence: r.confidence.min(100), profile: r.emotion.profile() }
    }
}

impl Detection {
    /// Rebuild a detection from untrusted query-string values (a shared result
    /// link). Unknown emotions fall back to [`Emotion::Happy`], unparseable
    /// confidence to [`DEFAULT_SHARED_CONFIDENCE`], and parsed confidence is
    /// clamped into `0..=100`.
    pub fn from_shared(emotion: Option<&str>, confidence: Option<&str>) -> Self {
        let emotion = emotion.and_then(Emotion::from_key).unwrap_or(Emotion::Happy);
        let confidence = confidence.map_or(DEFAULT_SHARED_CONFIDENCE, shared_confidence);
        ScoreResult { emotion, confidence }.into()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Integers outside `i64` still count as numbers and clamp to the nearer bound.
fn shared_confidence(raw: &str) -> u8 {
    match raw.trim().parse::<i64>() {
        Ok(c) => c.clamp(0, 100) as u8,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => 100,
            IntErrorKind::NegOverflow => 0,
            _ => DEFAULT_SHARED_CONFIDENCE,
        },
    }
}
