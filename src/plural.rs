//! Two-bucket cardinal plural selection.
//!
//! Only the `one`/`other` split is modelled. Locales that do not inflect
//! nouns by number (Indonesian, Japanese, Thai) use `other` for every
//! quantity and reject `one` templates at registration.

use std::fmt;

/// Cardinal plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum PluralRule {
    One,
    Other,
}

impl PluralRule {
    /// Lowercase CLDR name (`"one"`, `"other"`).
    pub fn name(self) -> &'static str {
        match self {
            PluralRule::One => "one",
            PluralRule::Other => "other",
        }
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-locale cardinal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum PluralRules {
    /// `one` when the integer part is 1 and no fraction digits are shown
    /// (English, Dutch, Arabic).
    OneOther,
    /// `one` when the integer part is 0 or 1 (French).
    French,
    /// Always `other`.
    OtherOnly,
}

impl PluralRules {
    /// Categories this rule can produce, in selection order.
    pub fn supported(self) -> &'static [PluralRule] {
        match self {
            PluralRules::OneOther | PluralRules::French => &[PluralRule::One, PluralRule::Other],
            PluralRules::OtherOnly => &[PluralRule::Other],
        }
    }

    /// Whether `rule` is a category of this locale.
    pub fn supports(self, rule: PluralRule) -> bool {
        self.supported().contains(&rule)
    }

    /// Select the category for `value` rendered with `digits` fraction digits.
    ///
    /// ```
    /// use vld_i18n::plural::{PluralRule, PluralRules};
    ///
    /// assert_eq!(PluralRules::OneOther.select(1.0, 0), PluralRule::One);
    /// assert_eq!(PluralRules::OneOther.select(1.0, 2), PluralRule::Other);
    /// assert_eq!(PluralRules::French.select(0.0, 0), PluralRule::One);
    /// assert_eq!(PluralRules::OtherOnly.select(1.0, 0), PluralRule::Other);
    /// ```
    pub fn select(self, value: f64, digits: usize) -> PluralRule {
        let integer = value.abs().trunc();
        match self {
            PluralRules::OneOther if integer == 1.0 && digits == 0 => PluralRule::One,
            PluralRules::French if integer <= 1.0 => PluralRule::One,
            _ => PluralRule::Other,
        }
    }
}

/// The `one`/`other` templates of a unit noun such as `"{0} character"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct PluralForms {
    pub one: Option<String>,
    pub other: String,
}

impl PluralForms {
    /// Distinct singular and plural forms.
    pub fn new(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: Some(one.into()),
            other: other.into(),
        }
    }

    /// A single form used for every quantity.
    pub fn other(other: impl Into<String>) -> Self {
        Self {
            one: None,
            other: other.into(),
        }
    }

    /// Iterate over the defined `(rule, template)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PluralRule, &str)> {
        self.one
            .as_deref()
            .map(|one| (PluralRule::One, one))
            .into_iter()
            .chain(std::iter::once((PluralRule::Other, self.other.as_str())))
    }
}
