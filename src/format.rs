//! Locale number formatting and template substitution.

/// Separators used to render a number in one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct NumberFormat {
    pub decimal: &'static str,
    pub group: &'static str,
    pub minus: &'static str,
}

impl NumberFormat {
    /// `1,113.00`
    pub const ENGLISH: NumberFormat = NumberFormat {
        decimal: ".",
        group: ",",
        minus: "-",
    };

    /// `1.113,00`
    pub const INDONESIAN: NumberFormat = NumberFormat {
        decimal: ",",
        group: ".",
        minus: "-",
    };

    /// `1 113,00` with a narrow no-break space.
    pub const FRENCH: NumberFormat = NumberFormat {
        decimal: ",",
        group: "\u{202f}",
        minus: "-",
    };

    /// `1٬113٫00`
    pub const ARABIC: NumberFormat = NumberFormat {
        decimal: "\u{066b}",
        group: "\u{066c}",
        minus: "-",
    };

    /// Render `value` with exactly `digits` fraction digits and grouped
    /// thousands.
    ///
    /// # Example
    /// ```
    /// use vld_i18n::format::NumberFormat;
    ///
    /// assert_eq!(NumberFormat::ENGLISH.format(1113.0, 2), "1,113.00");
    /// assert_eq!(NumberFormat::INDONESIAN.format(1113.0, 2), "1.113,00");
    /// assert_eq!(NumberFormat::ENGLISH.format(-1234567.0, 0), "-1,234,567");
    /// ```
    pub fn format(&self, value: f64, digits: usize) -> String {
        let rendered = format!("{:.*}", digits, value.abs());
        let (integer, fraction) = match rendered.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (rendered.as_str(), None),
        };

        let mut out = String::with_capacity(rendered.len() + integer.len() / 3 + 1);
        // "-0.00" is not a thing
        let is_zero = rendered.bytes().all(|b| b == b'0' || b == b'.');
        if value.is_sign_negative() && !is_zero {
            out.push_str(self.minus);
        }

        let len = integer.len();
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(self.group);
            }
            out.push(ch);
        }

        if let Some(fraction) = fraction {
            out.push_str(self.decimal);
            out.push_str(fraction);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::ENGLISH
    }
}

/// Number of characters after the first `.` of a rule parameter.
///
/// ```
/// use vld_i18n::format::fraction_digits;
///
/// assert_eq!(fraction_digits("1113.00"), 2);
/// assert_eq!(fraction_digits("7"), 0);
/// ```
pub fn fraction_digits(param: &str) -> usize {
    param
        .find('.')
        .map(|idx| param[idx + 1..].chars().count())
        .unwrap_or(0)
}

/// Replace `{0}`, `{1}`, … with the matching argument in a single pass.
///
/// Placeholders without an argument are kept as-is, and substituted text is
/// never scanned again.
///
/// ```
/// use vld_i18n::format::substitute;
///
/// assert_eq!(substitute("{0} must be {1}", &["Age", "18"]), "Age must be 18");
/// ```
pub fn substitute(template: &str, args: &[&str]) -> String {
    let extra: usize = args.iter().map(|a| a.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|idx| args.get(idx))
                .map(|value| (close, *value))
        });
        match arg {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
