//! Supported catalog languages.
//!
//! The canonical codes are ISO 639-1 (`ko`, `en`, `ja`, `zh`). Earlier
//! clients used `jp` and `cn` for Japanese and Chinese, so those are
//! accepted as parse-time aliases and normalized to the canonical code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported display language.
///
/// Korean is the service-wide default: it is substituted when a request
/// omits the `lang` parameter and it is the fixed sort-key language for
/// popularity ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Language {
    Ko,
    En,
    Ja,
    Zh,
}

impl Language {
    /// The canonical two-letter code.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
        }
    }

    /// All supported languages, in canonical listing order.
    pub fn all() -> [Language; 4] {
        [Language::Ko, Language::En, Language::Ja, Language::Zh]
    }

    /// Comma-separated canonical codes, for error messages.
    pub fn supported_codes() -> &'static str {
        "ko, en, ja, zh"
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ko
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            // Legacy aliases from the earlier schema variant.
            "ja" | "jp" => Ok(Language::Ja),
            "zh" | "cn" => Ok(Language::Zh),
            other => Err(crate::error::CoreError::UnsupportedLanguage {
                given: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = crate::error::CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for &'static str {
    fn from(lang: Language) -> Self {
        lang.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_codes_parse() {
        assert_eq!("ko".parse::<Language>().unwrap(), Language::Ko);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Ja);
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
    }

    #[test]
    fn test_legacy_aliases_normalize() {
        assert_eq!("jp".parse::<Language>().unwrap(), Language::Ja);
        assert_eq!("cn".parse::<Language>().unwrap(), Language::Zh);
        assert_eq!("jp".parse::<Language>().unwrap().as_str(), "ja");
    }

    #[test]
    fn test_unsupported_code_rejected() {
        assert!("fr".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
        assert!("KO".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_korean() {
        assert_eq!(Language::default(), Language::Ko);
    }
}
