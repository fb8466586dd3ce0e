//! Supported reply languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the bot can reply in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Bahasa Indonesia.
    #[serde(rename = "id")]
    Indonesian,
    #[default]
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// ISO 639-1 code, also used as the `lang` query parameter for weather sources.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Indonesian => "id",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" | "indonesian" | "bahasa" => Ok(Self::Indonesian),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("unsupported language '{other}' (expected 'id' or 'en')")),
        }
    }
}
