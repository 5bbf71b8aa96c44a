//! Shared query parameter types for API handlers.

use korip_core::error::CoreError;
use korip_core::lang::Language;
use serde::Deserialize;

/// The `?lang=` parameter accepted by every catalog endpoint.
///
/// Missing defaults to Korean; a present but unsupported value is a 400.
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    /// Resolve the requested language under the service-wide policy.
    pub fn language(&self) -> Result<Language, CoreError> {
        match self.lang.as_deref() {
            None => Ok(Language::Ko),
            Some(code) => code.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lang_defaults_to_korean() {
        let q = LangQuery { lang: None };
        assert_eq!(q.language().unwrap(), Language::Ko);
    }

    #[test]
    fn test_alias_normalizes() {
        let q = LangQuery {
            lang: Some("jp".into()),
        };
        assert_eq!(q.language().unwrap(), Language::Ja);
    }

    #[test]
    fn test_unsupported_lang_rejected() {
        let q = LangQuery {
            lang: Some("de".into()),
        };
        assert!(q.language().is_err());
    }
}
