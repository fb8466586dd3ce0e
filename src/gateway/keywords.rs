//! Intent classification: command, weather query, workout query, or free text.

/// Prefix that marks a command.
pub const COMMAND_PREFIX: char = '/';

/// Matched anywhere in the lowercased text.
const WEATHER_KEYWORDS: &[&str] = &[
    "cuaca",
    "weather",
    "panas",
    "dingin",
    "hujan",
    "cerah",
    "mendung",
    "suhu",
    "temperature",
    "kelembaban",
    "kelembapan",
    "humidity",
    "angin",
    "wind",
    "iklim",
    "climate",
];

/// Short words that would otherwise match inside unrelated words
/// ("training", "photo", "scold"); matched as whole words only.
const WEATHER_WORDS: &[&str] = &["rain", "rainy", "hot", "cold"];

const WORKOUT_KEYWORDS: &[&str] = &[
    "olahraga",
    "workout",
    "exercise",
    "gym",
    "fitness",
    "lari",
    "running",
    "senam",
    "yoga",
    "jogging",
    "sport",
    "latihan",
    "training",
];

/// What an inbound message asks for. Exactly one intent per message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Lowercased first token, including the prefix (e.g. `/help@sapa_bot`).
    Command(String),
    WeatherQuery,
    WorkoutQuery,
    FreeText,
}

/// Classify a message. Command wins, then weather, then workout.
pub fn classify(text: &str) -> Intent {
    if text.starts_with(COMMAND_PREFIX) {
        let token = text.split_whitespace().next().unwrap_or_default();
        return Intent::Command(token.to_lowercase());
    }

    let lower = text.to_lowercase();
    if is_weather_query(&lower) {
        Intent::WeatherQuery
    } else if kw_match(&lower, WORKOUT_KEYWORDS) {
        Intent::WorkoutQuery
    } else {
        Intent::FreeText
    }
}

fn is_weather_query(lower: &str) -> bool {
    kw_match(lower, WEATHER_KEYWORDS)
        || lower
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| WEATHER_WORDS.contains(&word))
}

/// Check if any keyword appears in the lowercased message.
fn kw_match(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lower.contains(kw))
}
