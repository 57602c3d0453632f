//! Validate, score, describe: the path a lyrics submission takes.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::config::DetectorConfig;
use crate::detection::Detection;
use crate::error::{ConfigError, LyricsError};
use crate::scorer::{EmotionScorer, Entropy};
use crate::validation::validate_lyrics;

/// Owns the configuration and the random source for a sequence of detections.
pub struct Detector<R> {
    scorer: EmotionScorer,
    config: DetectorConfig,
    rng: R,
}

impl Detector<SmallRng> {
    /// Default configuration, entropy-seeded generator.
    pub fn from_entropy() -> Self {
        Self::new(DetectorConfig::default(), SmallRng::from_entropy())
    }
}

impl<R: Entropy> Detector<R> {
    /// Builds a detector without checking `config`; call
    /// [`DetectorConfig::validate`] first or use [`Detector::try_new`].
    /// Out-of-range scoring values are clamped at scoring time, so confidence
    /// stays within `0..=100` but may not follow the configured arithmetic.
    pub fn new(config: DetectorConfig, rng: R) -> Self {
        Self { scorer: EmotionScorer::new(config.scoring.clone()), config, rng }
    }

    /// Like [`Detector::new`] but rejects a configuration that could produce
    /// confidence outside `0..=100` or an impossible length window.
    pub fn try_new(config: DetectorConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, rng))
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn detect(&mut self, lyrics: &str) -> Result<Detection, LyricsError> {
        let text = match validate_lyrics(lyrics, &self.config.limits) {
            Ok(t) => t,
            Err(e) => {
                debug!(error = ?e, "lyrics rejected");
                return Err(e);
            }
        };
        let (result, scores) = self.scorer.score_with_breakdown(text, &mut self.rng);
        info!(
            emotion = %result.emotion,
            confidence = result.confidence,
            matches = scores.total(),
            fallback = scores.total() == 0,
            "prediction successful"
        );
        Ok(result.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SAD_VERSE: &str =
        "Kau pergi tanpa kata, meninggalkan luka yang dalam di sini, aku menangis sendiri";

    fn detector(seed: u64) -> Detector<ChaCha8Rng> {
        Detector::new(DetectorConfig::default(), ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn rejects_short_lyrics_before_scoring() {
        let err = detector(1).detect("aku sedih").unwrap_err();
        assert!(matches!(err, LyricsError::TooShort { min: 50, .. }));
    }

    #[test]
    fn detects_dominant_emotion_in_valid_lyrics() {
        let d = detector(1).detect(SAD_VERSE).unwrap();
        assert_eq!(d.emotion, Emotion::Sad);
        assert_eq!(d.profile.name, "Sedih");
        // pergi, luka, menangis: sole category, share 100 -> cap.
        assert_eq!(d.confidence, 95);
    }

    #[test]
    fn scores_trimmed_text() {
        let padded = format!("\n\n   {SAD_VERSE}   \n");
        assert_eq!(detector(3).detect(&padded).unwrap().emotion, Emotion::Sad);
    }

    #[test]
    fn same_seed_same_detections() {
        let neutral = "Jalan panjang menuju kota, lampu jalan menyala terang, kami berjalan bersama";
        let mut a = detector(9);
        let mut b = detector(9);
        for _ in 0..10 {
            assert_eq!(a.detect(neutral).unwrap(), b.detect(neutral).unwrap());
        }
    }

    #[test]
    fn try_new_validates_config() {
        let mut cfg = DetectorConfig::default();
        cfg.limits.min_chars = 10_000;
        assert!(Detector::try_new(cfg, ChaCha8Rng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn try_new_accepts_defaults_and_keeps_config() {
        let d = Detector::try_new(DetectorConfig::default(), ChaCha8Rng::seed_from_u64(0)).unwrap();
        assert_eq!(d.config(), &DetectorConfig::default());
    }

    #[test]
    fn unvalidated_config_still_reports_in_range_confidence() {
        let mut cfg = DetectorConfig::default();
        cfg.scoring.confidence_cap = 250;
        cfg.scoring.jitter_span = 0;
        cfg.scoring.fallback_base = 90;
        cfg.scoring.fallback_span = 0;
        assert!(cfg.validate().is_err());

        let mut d = Detector::new(cfg, ChaCha8Rng::seed_from_u64(11));
        let matched = d.detect(SAD_VERSE).unwrap();
        assert_eq!(matched.confidence, 100);
        let neutral = "Jalan panjang menuju kota, lampu jalan menyala terang, kami berjalan bersama";
        assert_eq!(d.detect(neutral).unwrap().confidence, 90);
    }

    #[test]
    fn entropy_seeded_detector_works() {
        let d = Detector::from_entropy().detect(SAD_VERSE).unwrap();
        assert_eq!(d.emotion, Emotion::Sad);
    }
}
