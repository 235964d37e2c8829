//! Per-locale template store.
//!
//! A [`Translator`] owns the templates of one locale: plain templates keyed by
//! name, and cardinal templates keyed by name and [`PluralRule`]. It is
//! filled once during registration and only read afterwards.
//!
//! # Example
//! ```
//! use vld_i18n::format::NumberFormat;
//! use vld_i18n::plural::{PluralRule, PluralRules};
//! use vld_i18n::translator::Translator;
//!
//! let mut t = Translator::new("en", PluralRules::OneOther, NumberFormat::ENGLISH);
//! t.add("min-string", "{0} must be at least {1} in length", false).unwrap();
//! t.add_cardinal("min-string-character", "{0} character", PluralRule::One, false).unwrap();
//! t.add_cardinal("min-string-character", "{0} characters", PluralRule::Other, false).unwrap();
//!
//! let count = t.cardinal("min-string-character", 3.0, 0, "3").unwrap();
//! let msg = t.translate("min-string", &["Name", &count]).unwrap();
//! assert_eq!(msg, "Name must be at least 3 characters in length");
//! ```

use std::collections::BTreeMap;

use crate::error::{RegistrationError, TranslateError};
use crate::format::{substitute, NumberFormat};
use crate::plural::{PluralRule, PluralRules};

/// Template store for a single locale.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    plural_rules: PluralRules,
    number_format: NumberFormat,
    texts: BTreeMap<String, String>,
    cardinals: BTreeMap<String, BTreeMap<PluralRule, String>>,
}

impl Translator {
    pub fn new(
        locale: impl Into<String>,
        plural_rules: PluralRules,
        number_format: NumberFormat,
    ) -> Self {
        Self {
            locale: locale.into(),
            plural_rules,
            number_format,
            texts: BTreeMap::new(),
            cardinals: BTreeMap::new(),
        }
    }

    /// Locale code (`"fr"`, `"ja"`, …).
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn plural_rules(&self) -> PluralRules {
        self.plural_rules
    }

    pub fn number_format(&self) -> NumberFormat {
        self.number_format
    }

    /// Insert a plain template.
    ///
    /// Fails with [`RegistrationError::Conflict`] when `key` already exists and
    /// `override_existing` is false.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        template: impl Into<String>,
        override_existing: bool,
    ) -> Result<(), RegistrationError> {
        let key = key.into();
        if !override_existing && self.texts.contains_key(&key) {
            return Err(self.conflict(key));
        }
        self.texts.insert(key, template.into());
        Ok(())
    }

    /// Insert one plural form of a cardinal template. `{0}` receives the
    /// formatted quantity.
    pub fn add_cardinal(
        &mut self,
        key: impl Into<String>,
        template: impl Into<String>,
        rule: PluralRule,
        override_existing: bool,
    ) -> Result<(), RegistrationError> {
        let key = key.into();
        let template = template.into();
        if !self.plural_rules.supports(rule) {
            return Err(RegistrationError::UnsupportedPluralRule {
                locale: self.locale.clone(),
                key,
                rule,
            });
        }
        if !template.contains("{0}") {
            return Err(RegistrationError::MissingPlaceholder {
                locale: self.locale.clone(),
                key,
            });
        }
        let exists = self
            .cardinals
            .get(&key)
            .is_some_and(|forms| forms.contains_key(&rule));
        if exists && !override_existing {
            return Err(self.conflict(key));
        }
        self.cardinals.entry(key).or_default().insert(rule, template);
        Ok(())
    }

    /// Look up a plain template and substitute `args` positionally.
    pub fn translate(&self, key: &str, args: &[&str]) -> Result<String, TranslateError> {
        self.texts
            .get(key)
            .map(|template| substitute(template, args))
            .ok_or_else(|| TranslateError::UnknownKey {
                locale: self.locale.clone(),
                key: key.to_string(),
            })
    }

    /// Look up the plural form of `key` for `value` and substitute `{0}`
    /// with `formatted`.
    ///
    /// A missing `one` form falls back to `other`.
    pub fn cardinal(
        &self,
        key: &str,
        value: f64,
        digits: usize,
        formatted: &str,
    ) -> Result<String, TranslateError> {
        let forms = self
            .cardinals
            .get(key)
            .ok_or_else(|| TranslateError::UnknownKey {
                locale: self.locale.clone(),
                key: key.to_string(),
            })?;
        let rule = self.plural_rules.select(value, digits);
        let template = forms
            .get(&rule)
            .or_else(|| forms.get(&PluralRule::Other))
            .ok_or_else(|| TranslateError::MissingPluralForm {
                locale: self.locale.clone(),
                key: key.to_string(),
                rule,
            })?;
        Ok(substitute(template, &[formatted]))
    }

    /// Format a number with this locale's separators.
    pub fn format_number(&self, value: f64, digits: usize) -> String {
        self.number_format.format(value, digits)
    }

    /// Whether a plain template exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.texts.contains_key(key)
    }

    /// Whether any cardinal form exists under `key`.
    pub fn contains_cardinal(&self, key: &str) -> bool {
        self.cardinals.contains_key(key)
    }

    /// Raw plain template under `key`.
    pub fn template(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    /// Number of plain and cardinal keys.
    pub fn len(&self) -> usize {
        self.texts.len() + self.cardinals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.cardinals.is_empty()
    }

    /// Check that every cardinal key defines every plural rule the locale uses.
    pub fn verify(&self) -> Result<(), RegistrationError> {
        for (key, forms) in &self.cardinals {
            for rule in self.plural_rules.supported() {
                if !forms.contains_key(rule) {
                    return Err(RegistrationError::IncompleteCardinal {
                        locale: self.locale.clone(),
                        key: key.clone(),
                        rule: *rule,
                    });
                }
            }
        }
        Ok(())
    }

    /// Snapshot of every template as JSON, keys sorted.
    ///
    /// Plain templates map to strings; cardinal templates map to an object
    /// keyed by plural rule name.
    pub fn export(&self) -> serde_json::Value {
        let mut root = serde_json::Map::new();
        for (key, template) in &self.texts {
            root.insert(key.clone(), serde_json::Value::String(template.clone()));
        }
        for (key, forms) in &self.cardinals {
            let forms: serde_json::Map<String, serde_json::Value> = forms
                .iter()
                .map(|(rule, t)| (rule.name().to_string(), serde_json::Value::String(t.clone())))
                .collect();
            root.insert(key.clone(), serde_json::Value::Object(forms));
        }
        serde_json::json!({
            "locale": self.locale,
            "templates": root,
        })
    }

    fn conflict(&self, key: String) -> RegistrationError {
        RegistrationError::Conflict {
            locale: self.locale.clone(),
            key,
        }
    }
}
