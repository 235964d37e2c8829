//! Built-in locale catalogs.
//!
//! Each sub-module exposes `catalog()`, `translator()` and
//! `register_default_translations()`. Tag coverage differs per locale; tags a
//! locale does not list fall back to the default message.

pub mod arabic;
pub mod dutch;
pub mod english;
pub mod french;
pub mod indonesian;
pub mod japanese;
pub mod thai;

use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::error::RegistrationError;
use crate::format::NumberFormat;
use crate::plural::PluralRules;
use crate::translations::Translations;
use crate::translator::Translator;

/// A locale with a built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Locale {
    Ar,
    En,
    Fr,
    Id,
    Ja,
    Nl,
    Th,
}

impl Locale {
    /// Every built-in locale.
    pub const ALL: [Locale; 7] = [
        Locale::Ar,
        Locale::En,
        Locale::Fr,
        Locale::Id,
        Locale::Ja,
        Locale::Nl,
        Locale::Th,
    ];

    /// Locale code (`"ar"`, `"fr"`, …).
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Id => "id",
            Locale::Ja => "ja",
            Locale::Nl => "nl",
            Locale::Th => "th",
        }
    }

    pub fn plural_rules(self) -> PluralRules {
        match self {
            Locale::Ar | Locale::En | Locale::Nl => PluralRules::OneOther,
            Locale::Fr => PluralRules::French,
            Locale::Id | Locale::Ja | Locale::Th => PluralRules::OtherOnly,
        }
    }

    pub fn number_format(self) -> NumberFormat {
        match self {
            Locale::Ar => NumberFormat::ARABIC,
            Locale::Fr => NumberFormat::FRENCH,
            Locale::Id => NumberFormat::INDONESIAN,
            Locale::En | Locale::Ja | Locale::Nl | Locale::Th => NumberFormat::ENGLISH,
        }
    }

    /// An empty translator configured for this locale.
    pub fn translator(self) -> Translator {
        Translator::new(self.code(), self.plural_rules(), self.number_format())
    }

    /// The built-in catalog.
    pub fn catalog(self) -> Catalog {
        match self {
            Locale::Ar => arabic::catalog(),
            Locale::En => english::catalog(),
            Locale::Fr => french::catalog(),
            Locale::Id => indonesian::catalog(),
            Locale::Ja => japanese::catalog(),
            Locale::Nl => dutch::catalog(),
            Locale::Th => thai::catalog(),
        }
    }

    /// Build the catalog into a fresh translator.
    pub fn translations(self) -> Result<Translations, RegistrationError> {
        self.catalog().build(self.translator())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when parsing an unknown locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts a bare language code or a tag with a region (`"fr-CA"`,
    /// `"ja_JP"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == lang)
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}
