//! # vld-i18n — Localized validation error messages
//!
//! `vld-i18n` turns the field errors reported by a validation engine into
//! human-readable sentences in Arabic, English, French, Indonesian, Japanese,
//! Dutch or Thai.
//!
//! Every locale ships a [`Catalog`](catalog::Catalog) that maps validation
//! tags (`required`, `min`, `email`, …) to message templates. Count-bearing
//! tags (`len`, `min`, `max`, `lt`, `lte`, `gt`, `gte`) pick their wording from
//! the kind of the failing value and pluralize the unit noun
//! ("1 character" / "3 characters").
//!
//! ## Quick Start
//!
//! ```rust
//! use vld_i18n::prelude::*;
//!
//! let ja = vld_i18n::japanese().unwrap();
//!
//! let fe = FieldError::of::<Vec<String>>("GteMultiple", "gte").with_param("2");
//! assert_eq!(ja.translate(&fe), "GteMultipleは少なくとも2つの項目を含まなければなりません");
//!
//! // Tags without a localized template keep the engine's default message.
//! let fe = FieldError::new("Field", "custom_rule");
//! assert_eq!(ja.translate(&fe), fe.to_string());
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod formatter;
pub mod kind;
pub mod locales;
pub mod plural;
pub mod translations;
pub mod translator;

pub use locales::{Locale, UnknownLocale};
pub use translations::Translations;

// Re-export serde_json for users building field errors from JSON values
#[doc(hidden)]
pub use serde_json;

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Arabic translations.
pub fn arabic() -> Result<Translations, error::RegistrationError> {
    Locale::Ar.translations()
}

/// English translations.
pub fn english() -> Result<Translations, error::RegistrationError> {
    Locale::En.translations()
}

/// French translations.
///
/// ```
/// use vld_i18n::prelude::*;
///
/// let fr = vld_i18n::french().unwrap();
/// let fe = FieldError::of::<String>("Name", "required");
/// assert_eq!(fr.translate(&fe), "Name est un champ obligatoire");
/// ```
pub fn french() -> Result<Translations, error::RegistrationError> {
    Locale::Fr.translations()
}

/// Indonesian translations.
pub fn indonesian() -> Result<Translations, error::RegistrationError> {
    Locale::Id.translations()
}

/// Japanese translations.
pub fn japanese() -> Result<Translations, error::RegistrationError> {
    Locale::Ja.translations()
}

/// Dutch translations.
pub fn dutch() -> Result<Translations, error::RegistrationError> {
    Locale::Nl.translations()
}

/// Thai translations.
pub fn thai() -> Result<Translations, error::RegistrationError> {
    Locale::Th.translations()
}

/// Translations for a locale code such as `"fr"` or `"ja-JP"`.
///
/// ```
/// let nl = vld_i18n::for_locale("nl-NL").unwrap();
/// assert_eq!(nl.locale(), "nl");
/// assert!(vld_i18n::for_locale("xx").is_err());
/// ```
pub fn for_locale(code: &str) -> Result<Translations, error::Error> {
    let locale: Locale = code.parse()?;
    Ok(locale.translations()?)
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Import everything you need with `use vld_i18n::prelude::*`.
pub mod prelude {
    pub use crate::catalog::{Catalog, CompoundRule, RuleEntry, SimpleRule};
    pub use crate::error::{FieldError, FieldErrors, RegistrationError, TranslateError};
    pub use crate::format::NumberFormat;
    pub use crate::formatter::{CompoundKeys, TagFormatter};
    pub use crate::kind::{Classification, Kinded, ValueKind};
    pub use crate::locales::{Locale, UnknownLocale};
    pub use crate::plural::{PluralForms, PluralRule, PluralRules};
    pub use crate::translations::Translations;
    pub use crate::translator::Translator;
}
