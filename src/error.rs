use thiserror::Error;

/// Input rejected before scoring. Messages are the ones shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LyricsError {
    #[error("Mohon masukkan lirik lagu terlebih dahulu!")]
    Empty,

    #[error("Lirik terlalu pendek. Mohon masukkan lirik yang lebih panjang untuk hasil yang akurat.")]
    TooShort { len: usize, min: usize },

    #[error("Lirik terlalu panjang. Maksimal {max} karakter.")]
    TooLong { len: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
