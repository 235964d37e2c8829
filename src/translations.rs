//! Registered translations for one locale.
//!
//! [`Translations`] pairs a filled [`Translator`] with the formatter bound to
//! each tag. Formatting never fails from the caller's point of view: any
//! problem is logged and the field error's default message is returned.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::catalog::{Catalog, CompoundRule, RuleEntry, SimpleRule};
use crate::error::{FieldError, FieldErrors, RegistrationError, TranslateError};
use crate::formatter::{CompoundKeys, TagFormatter};
use crate::plural::PluralForms;
use crate::translator::Translator;

/// Localized messages for one locale, ready to translate field errors.
#[derive(Debug, Clone)]
pub struct Translations {
    translator: Translator,
    formatters: HashMap<String, TagFormatter>,
}

impl Translations {
    /// Wrap a translator with no tags bound yet.
    pub fn new(translator: Translator) -> Self {
        Self {
            translator,
            formatters: HashMap::new(),
        }
    }

    /// Register every entry of `catalog`, in order.
    ///
    /// Stops at the first error. Templates and formatters registered before
    /// the failing entry are kept.
    pub fn register(&mut self, catalog: &Catalog) -> Result<(), RegistrationError> {
        for entry in catalog.entries() {
            match entry {
                RuleEntry::Simple(rule) => self.register_simple(rule)?,
                RuleEntry::Compound(rule) => self.register_compound(rule)?,
            }
        }
        debug!(
            locale = self.translator.locale(),
            entries = catalog.len(),
            "registered translation catalog"
        );
        Ok(())
    }

    fn register_simple(&mut self, rule: &SimpleRule) -> Result<(), RegistrationError> {
        self.translator
            .add(rule.tag.as_str(), rule.template.as_str(), rule.override_existing)?;
        self.formatters.insert(rule.tag.clone(), TagFormatter::Simple);
        Ok(())
    }

    fn register_compound(&mut self, rule: &CompoundRule) -> Result<(), RegistrationError> {
        let incomplete = |variant: &'static str| RegistrationError::IncompleteRule {
            locale: self.translator.locale().to_string(),
            tag: rule.tag.clone(),
            variant,
        };
        let (string, characters) = rule.string.as_ref().ok_or_else(|| incomplete("string"))?;
        let number = rule.number.as_ref().ok_or_else(|| incomplete("number"))?;
        let (items, item) = rule.items.as_ref().ok_or_else(|| incomplete("items"))?;

        let keys = CompoundKeys::for_tag(&rule.tag, rule.datetime.is_some());
        let ov = rule.override_existing;

        self.translator.add(keys.string.as_str(), string.as_str(), ov)?;
        self.add_forms(&keys.character, characters, ov)?;
        self.translator.add(keys.number.as_str(), number.as_str(), ov)?;
        self.translator.add(keys.items.as_str(), items.as_str(), ov)?;
        self.add_forms(&keys.item, item, ov)?;
        if let (Some(key), Some(template)) = (&keys.datetime, &rule.datetime) {
            self.translator.add(key.as_str(), template.as_str(), ov)?;
        }

        self.formatters
            .insert(rule.tag.clone(), TagFormatter::Compound(keys));
        Ok(())
    }

    fn add_forms(
        &mut self,
        key: &str,
        forms: &PluralForms,
        override_existing: bool,
    ) -> Result<(), RegistrationError> {
        for (rule, template) in forms.iter() {
            self.translator
                .add_cardinal(key, template, rule, override_existing)?;
        }
        Ok(())
    }

    /// Localize one field error, falling back to its default message.
    ///
    /// # Example
    /// ```
    /// use vld_i18n::prelude::*;
    ///
    /// let fr = vld_i18n::french().unwrap();
    /// let fe = FieldError::of::<String>("MinString", "min").with_param("1");
    /// assert_eq!(fr.translate(&fe), "MinString doit faire une taille minimum de 1 caractère");
    ///
    /// let unknown = FieldError::new("Field", "no_such_tag");
    /// assert_eq!(fr.translate(&unknown), unknown.to_string());
    /// ```
    pub fn translate(&self, fe: &FieldError) -> String {
        match self.try_translate(fe) {
            Ok(message) => message,
            Err(TranslateError::NoTranslation { .. }) => {
                debug!(
                    locale = self.translator.locale(),
                    tag = fe.tag(),
                    "no translation registered, using default message"
                );
                fe.to_string()
            }
            Err(e) => {
                warn!(
                    locale = self.translator.locale(),
                    tag = fe.tag(),
                    field = fe.field(),
                    error = %e,
                    "error translating field error"
                );
                fe.to_string()
            }
        }
    }

    /// Localize one field error, reporting why it could not be localized.
    pub fn try_translate(&self, fe: &FieldError) -> Result<String, TranslateError> {
        let formatter = self
            .formatters
            .get(fe.tag())
            .ok_or_else(|| TranslateError::NoTranslation {
                tag: fe.tag().to_string(),
            })?;
        formatter.format(&self.translator, fe)
    }

    /// Localize every error, keyed by field namespace.
    ///
    /// Errors sharing a namespace keep the last message.
    pub fn translate_all(&self, errors: &FieldErrors) -> BTreeMap<String, String> {
        errors
            .iter()
            .map(|fe| (fe.namespace().to_string(), self.translate(fe)))
            .collect()
    }

    /// Whether a formatter is bound to `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.formatters.contains_key(tag)
    }

    /// Bound tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.formatters.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Formatter bound to `tag`.
    pub fn formatter(&self, tag: &str) -> Option<&TagFormatter> {
        self.formatters.get(tag)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn locale(&self) -> &str {
        self.translator.locale()
    }
}
