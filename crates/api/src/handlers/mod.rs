//! HTTP request handlers, one module per resource.

pub mod categories;
pub mod places;
pub mod regions;
pub mod users;

use korip_core::error::CoreError;
use korip_core::lang::Language;

/// Validate a translation set submitted on a create request.
///
/// Rejects an empty set, any blank name, and any language appearing twice
/// (legacy aliases count as the same language since they normalize before
/// this point). Every create endpoint that accepts `{translations: [...]}`
/// runs through this.
pub(crate) fn validate_translation_set<'a, I>(translations: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = (Language, &'a str)>,
{
    let mut seen: Vec<Language> = Vec::new();
    for (lang, name) in translations {
        if name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Translation names must not be blank".to_string(),
            ));
        }
        if seen.contains(&lang) {
            return Err(CoreError::Validation(format!(
                "Duplicate translation for language '{lang}'"
            )));
        }
        seen.push(lang);
    }
    if seen.is_empty() {
        return Err(CoreError::Validation(
            "At least one translation is required".to_string(),
        ));
    }
    Ok(())
}
