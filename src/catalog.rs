//! Message catalogs: the ordered list of rules registered for one locale.
//!
//! A catalog is plain data. [`Catalog::build`] (or
//! [`Translations::register`](crate::Translations::register)) walks it in
//! insertion order, inserts every template into a [`Translator`] and binds a
//! formatter to each tag.
//!
//! # Example
//! ```
//! use vld_i18n::prelude::*;
//!
//! let catalog = Catalog::new("en")
//!     .simple("required", "{0} is a required field")
//!     .compound(
//!         CompoundRule::new("min")
//!             .string("{0} must be at least {1} in length",
//!                 PluralForms::new("{0} character", "{0} characters"))
//!             .number("{0} must be {1} or greater")
//!             .items("{0} must contain at least {1}",
//!                 PluralForms::new("{0} item", "{0} items")),
//!     );
//!
//! let translations = catalog.build(vld_i18n::Locale::En.translator()).unwrap();
//! let fe = FieldError::of::<String>("Name", "min").with_param("3");
//! assert_eq!(translations.translate(&fe), "Name must be at least 3 characters in length");
//! ```

use crate::error::RegistrationError;
use crate::plural::PluralForms;
use crate::translations::Translations;
use crate::translator::Translator;

/// A tag with a single template: `{0}` is the field, `{1}` the parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SimpleRule {
    pub tag: String,
    pub template: String,
    pub override_existing: bool,
}

/// A count-bearing tag (`len`, `min`, `max`, `lt`, `lte`, `gt`, `gte`) with one
/// template per value classification.
///
/// Registered keys are derived from the tag: `<tag>-string`,
/// `<tag>-string-character`, `<tag>-number`, `<tag>-items`,
/// `<tag>-items-item` and `<tag>-datetime`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct CompoundRule {
    pub tag: String,
    pub string: Option<(String, PluralForms)>,
    pub number: Option<String>,
    pub items: Option<(String, PluralForms)>,
    pub datetime: Option<String>,
    pub override_existing: bool,
}

impl CompoundRule {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            string: None,
            number: None,
            items: None,
            datetime: None,
            override_existing: false,
        }
    }

    /// Template for string values; `{1}` receives the character count built
    /// from `characters`.
    pub fn string(mut self, template: impl Into<String>, characters: PluralForms) -> Self {
        self.string = Some((template.into(), characters));
        self
    }

    /// Template for numeric values; `{1}` receives the formatted number.
    pub fn number(mut self, template: impl Into<String>) -> Self {
        self.number = Some(template.into());
        self
    }

    /// Template for slices, arrays and maps; `{1}` receives the item count
    /// built from `items`.
    pub fn items(mut self, template: impl Into<String>, items: PluralForms) -> Self {
        self.items = Some((template.into(), items));
        self
    }

    /// Template for date/time values; only `{0}` is substituted.
    pub fn datetime(mut self, template: impl Into<String>) -> Self {
        self.datetime = Some(template.into());
        self
    }

    /// Replace templates already registered under the same keys.
    pub fn override_existing(mut self) -> Self {
        self.override_existing = true;
        self
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum RuleEntry {
    Simple(SimpleRule),
    Compound(CompoundRule),
}

impl RuleEntry {
    /// The validation tag this entry localizes.
    pub fn tag(&self) -> &str {
        match self {
            RuleEntry::Simple(rule) => &rule.tag,
            RuleEntry::Compound(rule) => &rule.tag,
        }
    }
}

/// Ordered rule entries for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Catalog {
    locale: String,
    entries: Vec<RuleEntry>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: vec![],
        }
    }

    /// Append a simple entry.
    pub fn simple(self, tag: impl Into<String>, template: impl Into<String>) -> Self {
        self.push(RuleEntry::Simple(SimpleRule {
            tag: tag.into(),
            template: template.into(),
            override_existing: false,
        }))
    }

    /// Append a simple entry that replaces an earlier template for `tag`.
    pub fn simple_override(self, tag: impl Into<String>, template: impl Into<String>) -> Self {
        self.push(RuleEntry::Simple(SimpleRule {
            tag: tag.into(),
            template: template.into(),
            override_existing: true,
        }))
    }

    /// Append the same template for several tags.
    pub fn simple_all(mut self, tags: &[&str], template: &str) -> Self {
        for tag in tags {
            self = self.simple(*tag, template);
        }
        self
    }

    /// Append a compound entry.
    pub fn compound(self, rule: CompoundRule) -> Self {
        self.push(RuleEntry::Compound(rule))
    }

    /// Append an entry.
    pub fn push(mut self, entry: RuleEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append every entry of `other`, after this catalog's own.
    pub fn extend(mut self, other: Catalog) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// Tags in registration order (a tag appears once per entry).
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(RuleEntry::tag)
    }

    /// Entry registered last for `tag`.
    pub fn get(&self, tag: &str) -> Option<&RuleEntry> {
        self.entries.iter().rev().find(|e| e.tag() == tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register this catalog into `translator` and return the finished
    /// translations.
    pub fn build(&self, translator: Translator) -> Result<Translations, RegistrationError> {
        let mut translations = Translations::new(translator);
        translations.register(self)?;
        Ok(translations)
    }
}
