//! Input policy applied before lyrics reach the scorer.

use crate::config::ValidationLimits;
use crate::error::LyricsError;

/// Trim `input` and check it against `limits`, returning the trimmed text.
///
/// Lengths are counted in characters, not bytes, so accented or non-Latin
/// lyrics are measured the way the user sees them.
pub fn validate_lyrics<'a>(input: &'a str, limits: &ValidationLimits) -> Result<&'a str, LyricsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LyricsError::Empty);
    }
    let len = trimmed.chars().count();
    if len < limits.min_chars {
        return Err(LyricsError::TooShort { len, min: limits.min_chars });
    }
    if len > limits.max_chars {
        return Err(LyricsError::TooLong { len, max: limits.max_chars });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ValidationLimits {
        ValidationLimits::default()
    }

    #[test]
    fn empty_and_whitespace_are_rejected() {
        assert_eq!(validate_lyrics("", &limits()), Err(LyricsError::Empty));
        assert_eq!(validate_lyrics(" \n\t ", &limits()), Err(LyricsError::Empty));
    }

    #[test]
    fn minimum_length_boundary() {
        let short = "a".repeat(49);
        assert_eq!(
            validate_lyrics(&short, &limits()),
            Err(LyricsError::TooShort { len: 49, min: 50 })
        );
        let ok = "a".repeat(50);
        assert_eq!(validate_lyrics(&ok, &limits()), Ok(ok.as_str()));
    }

    #[test]
    fn maximum_length_boundary() {
        let ok = "a".repeat(5000);
        assert!(validate_lyrics(&ok, &limits()).is_ok());
        let long = "a".repeat(5001);
        assert_eq!(
            validate_lyrics(&long, &limits()),
            Err(LyricsError::TooLong { len: 5001, max: 5000 })
        );
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let padded = format!("   {}   ", "b".repeat(49));
        assert!(matches!(validate_lyrics(&padded, &limits()), Err(LyricsError::TooShort { len: 49, .. })));

        let padded = format!("\n{}\n", "b".repeat(50));
        assert_eq!(validate_lyrics(&padded, &limits()).unwrap().len(), 50);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 50 two-byte characters.
        let text = "é".repeat(50);
        assert!(validate_lyrics(&text, &limits()).is_ok());
    }

    #[test]
    fn astral_characters_count_once() {
        // Each emoji is two UTF-16 units but one character here.
        let short = "😀".repeat(25);
        assert_eq!(
            validate_lyrics(&short, &limits()),
            Err(LyricsError::TooShort { len: 25, min: 50 })
        );
        assert!(validate_lyrics(&"😀".repeat(50), &limits()).is_ok());
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(LyricsError::Empty.to_string(), "Mohon masukkan lirik lagu terlebih dahulu!");
        assert_eq!(
            LyricsError::TooLong { len: 6000, max: 5000 }.to_string(),
            "Lirik terlalu panjang. Maksimal 5000 karakter."
        );
    }
}
