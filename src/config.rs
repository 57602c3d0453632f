//! Tunable constants for scoring and input validation.
//!
//! Defaults reproduce the behaviour of the lyrics page exactly; a host can
//! pass a partial JSON object and only override what it names.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Confidence arithmetic for [`crate::scorer::EmotionScorer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Upper clamp applied to keyword-driven confidence.
    pub confidence_cap: u8,
    /// Jitter added on a keyword match is drawn from `0..jitter_span`.
    pub jitter_span: u8,
    /// Lowest confidence reported when nothing matched.
    pub fallback_base: u8,
    /// Fallback confidence is `fallback_base + 0..fallback_span`.
    pub fallback_span: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { confidence_cap: 95, jitter_span: 15, fallback_base: 40, fallback_span: 30 }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.confidence_cap > 100 {
            return Err(ConfigError::Invalid(format!(
                "confidence_cap {} exceeds 100",
                self.confidence_cap
            )));
        }
        if self.jitter_span == 0 || self.fallback_span == 0 {
            return Err(ConfigError::Invalid("jitter_span and fallback_span must be at least 1".into()));
        }
        // Highest fallback value is base + span - 1.
        if self.fallback_base as u16 + self.fallback_span as u16 > 101 {
            return Err(ConfigError::Invalid(format!(
                "fallback range {}..{} leaves 0..=100",
                self.fallback_base,
                self.fallback_base as u16 + self.fallback_span as u16
            )));
        }
        Ok(())
    }
}

/// Length policy applied to lyrics before they reach the scorer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Minimum length after trimming, in Unicode scalar values (not UTF-16
    /// units as JS `String.length` counts, nor bytes).
    pub min_chars: usize,
    /// Maximum length after trimming, same unit as `min_chars`.
    pub max_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self { min_chars: 50, max_chars: 5000 }
    }
}

impl ValidationLimits {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_chars > self.max_chars {
            return Err(ConfigError::Invalid(format!(
                "min_chars {} is greater than max_chars {}",
                self.min_chars, self.max_chars
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub scoring: ScoringConfig,
    pub limits: ValidationLimits,
}

impl DetectorConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DetectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.limits.validate()
    }
}
