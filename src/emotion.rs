//! Emotion categories, their keyword sets and the presentation metadata the
//! page renders for each of them.
//!
//! Everything here is `'static` data: the keyword table is read on every
//! scoring call and never mutated.

use serde::{Deserialize, Serialize};

// --- Categories ---------------------------------------------------------------

/// The four labels the detector can output. Declaration order doubles as the
/// tie-break order when several categories reach the same keyword count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    #[serde(rename = "bahagia")]
    Happy,
    #[serde(rename = "sedih")]
    Sad,
    #[serde(rename = "marah")]
    Angry,
    #[serde(rename = "takut")]
    Fear,
}

impl Emotion {
    /// All categories in tie-break order.
    pub const ALL: [Emotion; 4] = [Emotion::Happy, Emotion::Sad, Emotion::Angry, Emotion::Fear];

    /// Position in [`Emotion::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Emotion::Happy => 0,
            Emotion::Sad => 1,
            Emotion::Angry => 2,
            Emotion::Fear => 3,
        }
    }

    /// Wire key used by the page and in query strings (`bahagia`, `sedih`, ...).
    pub fn key(self) -> &'static str {
        self.profile().key
    }

    /// Case-sensitive lookup by wire key.
    pub fn from_key(key: &str) -> Option<Emotion> {
        Emotion::ALL.into_iter().find(|e| e.key() == key)
    }

    pub fn keywords(self) -> &'static [&'static str] {
        KEYWORDS[self.index()]
    }

    pub fn profile(self) -> &'static EmotionProfile {
        &PROFILES[self.index()]
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// --- Keyword table ------------------------------------------------------------

// Lowercase substrings; sets are disjoint across categories.
const HAPPY_KEYWORDS: &[&str] = &[
    "bahagia", "senang", "gembira", "cinta", "suka", "tertawa", "tersenyum", "indah", "cantik",
    "amazing", "wonderful",
];

const SAD_KEYWORDS: &[&str] = &[
    "sedih", "menangis", "sakit", "hati", "rindu", "pergi", "tinggalkan", "hancur", "luka",
    "patah", "sepi",
];

const ANGRY_KEYWORDS: &[&str] = &[
    "marah", "benci", "kesal", "muak", "geram", "jengkel", "kacau", "sialan", "bodoh", "tidak",
];

const FEAR_KEYWORDS: &[&str] = &[
    "takut", "khawatir", "cemas", "gelisah", "was-was", "panik", "ngeri", "seram", "menakutkan",
];

/// Keyword sets indexed by [`Emotion::index`].
pub static KEYWORDS: [&[&str]; 4] = [HAPPY_KEYWORDS, SAD_KEYWORDS, ANGRY_KEYWORDS, FEAR_KEYWORDS];

// --- Presentation metadata ----------------------------------------------------

/// Display data for one category. The crate never renders it; it travels with
/// each detection so the page can.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct EmotionProfile {
    pub key: &'static str,
    pub name: &'static str,
    /// Font Awesome class list.
    pub icon: &'static str,
    /// Solid accent colour.
    pub color: &'static str,
    /// Start / end stops of the 45deg badge gradient.
    pub gradient: (&'static str, &'static str),
    pub bg_class: &'static str,
    pub description: &'static str,
}

impl EmotionProfile {
    /// CSS `background` value for the result badge.
    pub fn css_gradient(&self) -> String {
        format!("linear-gradient(45deg, {}, {})", self.gradient.0, self.gradient.1)
    }
}

static PROFILES: [EmotionProfile; 4] = [
    EmotionProfile {
        key: "bahagia",
        name: "Bahagia",
        icon: "fas fa-smile",
        color: "#ffd700",
        gradient: ("#ffd700", "#ffb347"),
        bg_class: "happy-bg",
        description: "Lirik ini mengekspresikan perasaan bahagia dan kegembiraan dengan nuansa positif yang kuat. Terdapat tema-tema tentang cinta, kebahagiaan, dan optimisme.",
    },
    EmotionProfile {
        key: "sedih",
        name: "Sedih",
        icon: "fas fa-sad-tear",
        color: "#87ceeb",
        gradient: ("#87ceeb", "#4169e1"),
        bg_class: "sad-bg",
        description: "Lirik ini menggambarkan kesedihan mendalam, kehilangan, atau melankolis. Tema-tema tentang patah hati, kerinduan, dan emosi yang menyentuh.",
    },
    EmotionProfile {
        key: "marah",
        name: "Marah",
        icon: "fas fa-angry",
        color: "#ff6b6b",
        gradient: ("#ff6b6b", "#ff8e8e"),
        bg_class: "angry-bg",
        description: "Lirik ini mengandung kemarahan, frustrasi, atau emosi yang intens. Terdapat ekspresi ketidakpuasan, protes, atau pergolakan emosi.",
    },
    EmotionProfile {
        key: "takut",
        name: "Takut",
        icon: "fas fa-dizzy",
        color: "#dda0dd",
        gradient: ("#dda0dd", "#9370db"),
        bg_class: "fear-bg",
        description: "Lirik ini menunjukkan ketakutan, kecemasan, atau kekhawatiran. Tema-tema tentang ketidakpastian, ancaman, atau situasi yang menimbulkan rasa takut.",
    },
];

/// Catalog entry served to the page: profile plus the keywords that drive it.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub profile: &'static EmotionProfile,
    pub keywords: &'static [&'static str],
}

/// Every category keyed by its wire key, in tie-break order.
pub fn catalog() -> serde_json::Result<serde_json::Map<String, serde_json::Value>> {
    Emotion::ALL
        .into_iter()
        .map(|e| {
            let entry = CatalogEntry { profile: e.profile(), keywords: e.keywords() };
            serde_json::to_value(entry).map(|v| (e.key().to_string(), v))
        })
        .collect()
}
