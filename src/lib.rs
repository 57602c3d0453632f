//! EmotifyLyrics core crate.
//!
//! Guesses the dominant emotion (bahagia / sedih / marah / takut) of Indonesian
//! song lyrics with a keyword-presence heuristic. The page script keeps all
//! DOM work (navigation, toasts, result rendering, sharing) and calls into the
//! exports below with the raw textarea value.
//!
//! Native Rust callers use [`Detector`] or [`EmotionScorer`] directly.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod detection;
pub mod detector;
pub mod emotion;
pub mod error;
pub mod scorer;
pub mod validation;

pub use config::{DetectorConfig, ScoringConfig, ValidationLimits};
pub use detection::Detection;
pub use detector::Detector;
pub use emotion::{Emotion, EmotionProfile};
pub use error::{ConfigError, LyricsError};
pub use scorer::{CategoryScores, EmotionScorer, Entropy, ScoreResult};
pub use validation::validate_lyrics;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS surface
// -----------------------------------------------------------------------------

/// Detector handle held by the page for the lifetime of the form.
#[wasm_bindgen]
pub struct LyricsDetector {
    inner: Detector<SmallRng>,
}

#[wasm_bindgen]
impl LyricsDetector {
    /// `config_json` is an optional partial `DetectorConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<LyricsDetector, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => {
                DetectorConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => DetectorConfig::default(),
        };
        let inner = Detector::try_new(config, SmallRng::from_entropy())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(LyricsDetector { inner })
    }

    /// Validate and score `lyrics`. Returns the detection as JSON; throws the
    /// user-facing message when the input is rejected.
    pub fn detect(&mut self, lyrics: &str) -> Result<String, JsValue> {
        let detection = self.inner.detect(lyrics).map_err(|e| JsValue::from_str(&e.to_string()))?;
        detection
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

/// All categories with their display metadata and keywords, keyed by wire key.
#[wasm_bindgen(js_name = emotionCatalog)]
pub fn emotion_catalog() -> Result<String, JsValue> {
    emotion::catalog()
        .map(|map| serde_json::Value::Object(map).to_string())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Rebuild a result from shared-link query parameters.
#[wasm_bindgen(js_name = resolveSharedResult)]
pub fn resolve_shared_result(emotion: Option<String>, confidence: Option<String>) -> Result<String, JsValue> {
    Detection::from_shared(emotion.as_deref(), confidence.as_deref())
        .to_json()
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
