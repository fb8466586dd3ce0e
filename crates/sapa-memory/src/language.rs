//! Heuristic Indonesian/English detection by common-word counting.
//!
//! Best-effort only: short messages often score 0–0 and fall back to the
//! caller's default.

use sapa_core::language::Language;

const INDONESIAN_WORDS: &[&str] = &[
    "aku", "anda", "apa", "apakah", "ada", "bagaimana", "bagus", "besok", "bisa", "boleh",
    "cuaca", "dan", "dengan", "di", "dong", "gimana", "hari", "halo", "ini", "itu", "jam",
    "kamu", "kapan", "ke", "kenapa", "mau", "mengapa", "olahraga", "pagi", "saya", "sekarang",
    "selamat", "siang", "sore", "terima", "kasih", "tidak", "tolong", "untuk", "yang", "sih",
    "nggak", "gak", "juga", "sudah", "belum", "dari", "akan", "malam",
];

const ENGLISH_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "what", "how", "why", "when", "where", "who", "you",
    "i", "me", "my", "it", "and", "or", "to", "of", "in", "on", "for", "with", "can", "could",
    "please", "hello", "hi", "thanks", "thank", "today", "tomorrow", "weather", "workout",
    "good", "morning", "do", "does", "will", "should", "not", "this", "that", "now",
];

/// Count `(indonesian, english)` word hits in `text`.
pub fn language_scores(text: &str) -> (usize, usize) {
    let lower = text.to_lowercase();
    lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .fold((0, 0), |(id, en), word| {
            (
                id + usize::from(INDONESIAN_WORDS.contains(&word)),
                en + usize::from(ENGLISH_WORDS.contains(&word)),
            )
        })
}

/// Return the higher-scoring language, or `None` on a tie.
pub fn detect_language_opt(text: &str) -> Option<Language> {
    let (id, en) = language_scores(text);
    match id.cmp(&en) {
        std::cmp::Ordering::Greater => Some(Language::Indonesian),
        std::cmp::Ordering::Less => Some(Language::English),
        std::cmp::Ordering::Equal => None,
    }
}

/// Return the higher-scoring language, or `default` on a tie.
pub fn detect_language(text: &str, default: Language) -> Language {
    detect_language_opt(text).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indonesian_wins_three_to_one() {
        // "apa", "cuaca", "hari" vs "today".
        let text = "apa cuaca hari today";
        assert_eq!(language_scores(text), (3, 1));
        assert_eq!(
            detect_language(text, Language::English),
            Language::Indonesian
        );
    }

    #[test]
    fn test_english_sentence() {
        assert_eq!(
            detect_language("How is the weather today?", Language::Indonesian),
            Language::English
        );
    }

    #[test]
    fn test_tie_uses_default() {
        assert_eq!(language_scores("👍 xyz"), (0, 0));
        assert_eq!(detect_language("👍 xyz", Language::Indonesian), Language::Indonesian);
        assert_eq!(detect_language("", Language::English), Language::English);
    }

    #[test]
    fn test_detect_opt_reports_tie_as_none() {
        assert_eq!(detect_language_opt("xyz"), None);
        assert_eq!(detect_language_opt("saya mau"), Some(Language::Indonesian));
        assert_eq!(detect_language_opt("thank you"), Some(Language::English));
    }

    #[test]
    fn test_matches_whole_words_only() {
        // "the" inside "thermal" and "di" inside "dingin" must not count.
        assert_eq!(language_scores("thermal dingin"), (0, 0));
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert_eq!(language_scores("SAYA, Mau... OLAHRAGA!"), (3, 0));
    }
}
