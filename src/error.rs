use std::fmt;

use crate::kind::{Classification, Kinded, ValueKind};
use crate::locales::UnknownLocale;
use crate::plural::PluralRule;

/// A single failed field, as reported by the validation engine.
///
/// The engine owns validation; this type only carries what message formatting
/// needs. Its `Display` output is the unlocalized default message, which is
/// also what [`Translations::translate`](crate::Translations::translate)
/// returns when no localized template applies.
///
/// # Example
/// ```
/// use vld_i18n::prelude::*;
///
/// let fe = FieldError::new("MinString", "min")
///     .with_param("1")
///     .with_kind(ValueKind::String)
///     .with_namespace("Test.MinString");
/// assert_eq!(
///     fe.to_string(),
///     "Key: 'Test.MinString' Error:Field validation for 'MinString' failed on the 'min' tag"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FieldError {
    tag: String,
    field: String,
    namespace: Option<String>,
    param: String,
    kind: ValueKind,
}

impl FieldError {
    /// Create a field error for `field` failing `tag`. The kind defaults to
    /// [`ValueKind::Invalid`], which formats like a number.
    pub fn new(field: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            field: field.into(),
            namespace: None,
            param: String::new(),
            kind: ValueKind::Invalid,
        }
    }

    /// Create a field error whose kind is taken from the static type `T`.
    ///
    /// ```
    /// use vld_i18n::prelude::*;
    ///
    /// let fe = FieldError::of::<Vec<String>>("Tags", "min").with_param("2");
    /// assert_eq!(fe.classify(), Classification::Collection);
    /// ```
    pub fn of<T: Kinded + ?Sized>(field: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::new(field, tag).with_kind(T::value_kind())
    }

    /// Create a field error whose kind is taken from a JSON value.
    pub fn for_json(
        field: impl Into<String>,
        tag: impl Into<String>,
        value: &serde_json::Value,
    ) -> Self {
        Self::new(field, tag).with_kind(ValueKind::from_json(value))
    }

    /// Set the raw rule parameter (`"1"`, `"1113.00"`, `"red green"`).
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// Set the value kind of the failing field.
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the full path of the field (e.g. `"User.Address.City"`).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// The failed validation tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The field name substituted for `{0}`.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The full path, falling back to the field name.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(&self.field)
    }

    /// The raw rule parameter.
    pub fn param(&self) -> &str {
        &self.param
    }

    /// The value kind as reported by the engine.
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Classify the value kind once for formatter dispatch.
    pub fn classify(&self) -> Classification {
        self.kind.classify()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: '{}' Error:Field validation for '{}' failed on the '{}' tag",
            self.namespace(),
            self.field,
            self.tag
        )
    }
}

impl std::error::Error for FieldError {}

/// Collection of field errors from one validation call.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FieldErrors {
    pub errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Create an empty error container.
    pub fn new() -> Self {
        Self { errors: vec![] }
    }

    /// Push a single field error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Merge another container's errors into this one.
    pub fn merge(mut self, other: FieldErrors) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Error raised while inserting templates into a translator.
///
/// Registration stops at the first error; templates inserted before it stay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The key already holds a template and the entry does not override.
    #[error("conflicting translation for key '{key}' in locale '{locale}'")]
    Conflict { locale: String, key: String },

    /// The locale has no such plural category (e.g. `one` in Japanese).
    #[error("plural rule '{rule}' is not used by locale '{locale}' (key '{key}')")]
    UnsupportedPluralRule {
        locale: String,
        key: String,
        rule: PluralRule,
    },

    /// A cardinal template must contain `{0}` for the quantity.
    #[error("cardinal template for key '{key}' in locale '{locale}' is missing '{{0}}'")]
    MissingPlaceholder { locale: String, key: String },

    /// A compound rule was registered without one of its mandatory variants.
    #[error("rule '{tag}' in locale '{locale}' has no '{variant}' template")]
    IncompleteRule {
        locale: String,
        tag: String,
        variant: &'static str,
    },

    /// A cardinal key lacks a plural category the locale uses.
    #[error("cardinal key '{key}' in locale '{locale}' has no '{rule}' form")]
    IncompleteCardinal {
        locale: String,
        key: String,
        rule: PluralRule,
    },
}

/// Reason a field error could not be localized.
///
/// [`Translations::translate`](crate::Translations::translate) never returns
/// this: it logs it and falls back to the field error's default message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("unknown translation key '{key}' in locale '{locale}'")]
    UnknownKey { locale: String, key: String },

    #[error("no '{rule}' form for cardinal key '{key}' in locale '{locale}'")]
    MissingPluralForm {
        locale: String,
        key: String,
        rule: PluralRule,
    },

    #[error("parameter '{param}' of tag '{tag}' is not a finite number")]
    InvalidParam { tag: String, param: String },

    #[error("tag '{tag}' cannot be used on a struct type")]
    UnsupportedKind { tag: String },

    #[error("no translation registered for tag '{tag}'")]
    NoTranslation { tag: String },
}

/// Error returned when loading a locale by code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    UnknownLocale(#[from] UnknownLocale),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}
