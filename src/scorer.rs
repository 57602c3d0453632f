//! Keyword-counting emotion heuristic.
//!
//! Each keyword contributes at most one point to its category, no matter how
//! often it repeats. The category with the most points wins (first in
//! [`Emotion::ALL`] order on a tie) and confidence is the winner's share of all
//! points plus a little jitter. When nothing matches, a category and a low
//! confidence are drawn at random.

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::emotion::Emotion;

// --- Random source ------------------------------------------------------------

/// Uniform integer draws used by the scorer.
///
/// Implemented for every [`rand::Rng`]; tests can supply a scripted source to
/// pin exact outputs.
pub trait Entropy {
    /// Uniform value in `0..upper`. Callers never pass `upper == 0`.
    fn below(&mut self, upper: u32) -> u32;
}

impl<R: rand::Rng + ?Sized> Entropy for R {
    fn below(&mut self, upper: u32) -> u32 {
        self.gen_range(0..upper)
    }
}

// --- Results ------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub emotion: Emotion,
    /// Always within `0..=100`.
    pub confidence: u8,
}

/// Keyword hits per category, indexed by [`Emotion::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores([u32; 4]);

impl CategoryScores {
    /// Count keyword presence for every category in `text` (case-insensitive).
    pub fn tally(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let mut counts = [0u32; 4];
        for emotion in Emotion::ALL {
            counts[emotion.index()] =
                emotion.keywords().iter().filter(|kw| lowered.contains(*kw)).count() as u32;
        }
        Self(counts)
    }

    pub fn get(&self, emotion: Emotion) -> u32 {
        self.0[emotion.index()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// First category reaching the highest count, or `None` when nothing matched.
    pub fn leader(&self) -> Option<Emotion> {
        let max = self.max();
        if max == 0 {
            return None;
        }
        Emotion::ALL.into_iter().find(|e| self.get(*e) == max)
    }
}

// --- Scorer -------------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct EmotionScorer {
    config: ScoringConfig,
}

impl EmotionScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score<E: Entropy + ?Sized>(&self, text: &str, rng: &mut E) -> ScoreResult {
        self.score_with_breakdown(text, rng).0
    }

    /// Score `text` and also return the per-category counts behind the result.
    ///
    /// Draw order: a keyword match takes one draw (jitter); the fallback takes
    /// the category index first, then the confidence offset.
    pub fn score_with_breakdown<E: Entropy + ?Sized>(
        &self,
        text: &str,
        rng: &mut E,
    ) -> (ScoreResult, CategoryScores) {
        let scores = CategoryScores::tally(text);
        let cfg = &self.config;

        let result = match scores.leader() {
            None => {
                let idx = rng.below(Emotion::ALL.len() as u32) as usize;
                let offset = rng.below(cfg.fallback_span.max(1) as u32);
                ScoreResult {
                    emotion: Emotion::ALL[idx],
                    confidence: (cfg.fallback_base as u32 + offset).min(100) as u8,
                }
            }
            Some(emotion) => {
                // Integer division floors the winner's share.
                let share = scores.max() * 100 / scores.total();
                let jitter = rng.below(cfg.jitter_span.max(1) as u32);
                ScoreResult {
                    emotion,
                    confidence: (share + jitter).min(cfg.confidence_cap as u32).min(100) as u8,
                }
            }
        };
        (result, scores)
    }
}
