//! Tag formatters: turn one field error into a localized sentence.
//!
//! Simple tags substitute the field name and raw parameter directly.
//! Compound tags share one routine driven by [`CompoundKeys`]: classify the
//! value, pick the template family, and build the plural count for strings
//! and collections.

use crate::error::{FieldError, TranslateError};
use crate::format::fraction_digits;
use crate::kind::Classification;
use crate::translator::Translator;

/// Template keys of one compound tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundKeys {
    pub string: String,
    pub character: String,
    pub number: String,
    pub items: String,
    pub item: String,
    pub datetime: Option<String>,
}

impl CompoundKeys {
    /// Keys derived from `tag`. `datetime` says whether a date/time variant
    /// was registered.
    pub fn for_tag(tag: &str, datetime: bool) -> Self {
        Self {
            string: format!("{tag}-string"),
            character: format!("{tag}-string-character"),
            number: format!("{tag}-number"),
            items: format!("{tag}-items"),
            item: format!("{tag}-items-item"),
            datetime: datetime.then(|| format!("{tag}-datetime")),
        }
    }
}

/// The formatter bound to a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFormatter {
    /// `{0}` = field, `{1}` = raw parameter, looked up under the tag itself.
    Simple,
    Compound(CompoundKeys),
}

impl TagFormatter {
    pub fn format(&self, translator: &Translator, fe: &FieldError) -> Result<String, TranslateError> {
        match self {
            TagFormatter::Simple => translator.translate(fe.tag(), &[fe.field(), fe.param()]),
            TagFormatter::Compound(keys) => format_compound(keys, translator, fe),
        }
    }
}

/// Rule parameter parsed as a number, with the digits it was written with.
struct Quantity {
    value: f64,
    digits: usize,
}

impl Quantity {
    fn parse(fe: &FieldError) -> Result<Self, TranslateError> {
        let param = fe.param();
        let value = param
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| TranslateError::InvalidParam {
                tag: fe.tag().to_string(),
                param: param.to_string(),
            })?;
        Ok(Self {
            value,
            digits: fraction_digits(param),
        })
    }

    fn formatted(&self, translator: &Translator) -> String {
        translator.format_number(self.value, self.digits)
    }

    /// The unit-noun phrase (`"3 characters"`) for this quantity.
    fn counted(&self, translator: &Translator, key: &str) -> Result<String, TranslateError> {
        translator.cardinal(key, self.value, self.digits, &self.formatted(translator))
    }
}

fn format_compound(
    keys: &CompoundKeys,
    translator: &Translator,
    fe: &FieldError,
) -> Result<String, TranslateError> {
    let unsupported = || TranslateError::UnsupportedKind {
        tag: fe.tag().to_string(),
    };

    match fe.classify() {
        Classification::Text => {
            let count = Quantity::parse(fe)?.counted(translator, &keys.character)?;
            translator.translate(&keys.string, &[fe.field(), &count])
        }
        Classification::Collection => {
            let count = Quantity::parse(fe)?.counted(translator, &keys.item)?;
            translator.translate(&keys.items, &[fe.field(), &count])
        }
        Classification::Temporal => {
            let key = keys.datetime.as_deref().ok_or_else(unsupported)?;
            translator.translate(key, &[fe.field()])
        }
        Classification::Unsupported => Err(unsupported()),
        Classification::Numeric => {
            let number = Quantity::parse(fe)?.formatted(translator);
            translator.translate(&keys.number, &[fe.field(), &number])
        }
    }
}
