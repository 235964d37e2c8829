use vld_i18n::format::{fraction_digits, substitute};
use vld_i18n::prelude::*;

// ---------------------------------------------------------------------------
// Plural selection
// ---------------------------------------------------------------------------

#[test]
fn one_other_selection() {
    let rules = PluralRules::OneOther;
    assert_eq!(rules.select(1.0, 0), PluralRule::One);
    assert_eq!(rules.select(-1.0, 0), PluralRule::One);
    assert_eq!(rules.select(0.0, 0), PluralRule::Other);
    assert_eq!(rules.select(2.0, 0), PluralRule::Other);
    assert_eq!(rules.select(1.0, 2), PluralRule::Other);
    assert_eq!(rules.select(1.5, 1), PluralRule::Other);
    assert_eq!(rules.select(11.0, 0), PluralRule::Other);
}

#[test]
fn french_selection() {
    let rules = PluralRules::French;
    assert_eq!(rules.select(0.0, 0), PluralRule::One);
    assert_eq!(rules.select(1.0, 0), PluralRule::One);
    assert_eq!(rules.select(1.99, 2), PluralRule::One);
    assert_eq!(rules.select(2.0, 0), PluralRule::Other);
    assert_eq!(rules.select(1000.0, 0), PluralRule::Other);
}

#[test]
fn other_only_selection() {
    let rules = PluralRules::OtherOnly;
    for value in [0.0, 1.0, 2.0, 1.5] {
        assert_eq!(rules.select(value, 0), PluralRule::Other);
    }
    assert!(!rules.supports(PluralRule::One));
    assert_eq!(rules.supported(), &[PluralRule::Other]);
}

#[test]
fn locale_rules() {
    assert_eq!(Locale::Fr.plural_rules(), PluralRules::French);
    assert_eq!(Locale::Nl.plural_rules(), PluralRules::OneOther);
    assert_eq!(Locale::Ar.plural_rules(), PluralRules::OneOther);
    for locale in [Locale::Id, Locale::Ja, Locale::Th] {
        assert_eq!(locale.plural_rules(), PluralRules::OtherOnly);
    }
}

#[test]
fn plural_forms_iteration() {
    let forms = PluralForms::new("{0} item", "{0} items");
    let pairs: Vec<_> = forms.iter().collect();
    assert_eq!(
        pairs,
        vec![(PluralRule::One, "{0} item"), (PluralRule::Other, "{0} items")]
    );

    let forms = PluralForms::other("{0}つ");
    let pairs: Vec<_> = forms.iter().collect();
    assert_eq!(pairs, vec![(PluralRule::Other, "{0}つ")]);
    assert_eq!(PluralRule::One.to_string(), "one");
}

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

#[test]
fn english_grouping() {
    let f = NumberFormat::ENGLISH;
    assert_eq!(f.format(0.0, 0), "0");
    assert_eq!(f.format(999.0, 0), "999");
    assert_eq!(f.format(1000.0, 0), "1,000");
    assert_eq!(f.format(1113.0, 2), "1,113.00");
    assert_eq!(f.format(1234567.891, 3), "1,234,567.891");
    assert_eq!(f.format(-42.5, 1), "-42.5");
    assert_eq!(NumberFormat::default(), f);
}

#[test]
fn negative_zero_has_no_sign() {
    assert_eq!(NumberFormat::ENGLISH.format(-0.001, 2), "0.00");
    assert_eq!(NumberFormat::ENGLISH.format(-0.0, 0), "0");
}

#[test]
fn locale_separators() {
    assert_eq!(NumberFormat::INDONESIAN.format(1113.0, 2), "1.113,00");
    assert_eq!(NumberFormat::FRENCH.format(1113.0, 2), "1\u{202f}113,00");
    assert_eq!(
        NumberFormat::ARABIC.format(1234567.0, 1),
        "1\u{066c}234\u{066c}567\u{066b}0"
    );
    assert_eq!(Locale::Nl.number_format(), NumberFormat::ENGLISH);
    assert_eq!(Locale::Id.number_format(), NumberFormat::INDONESIAN);
}

#[test]
fn fraction_digit_counting() {
    assert_eq!(fraction_digits("1"), 0);
    assert_eq!(fraction_digits("1113.00"), 2);
    assert_eq!(fraction_digits("0.5"), 1);
    assert_eq!(fraction_digits("-3.250"), 3);
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

#[test]
fn substitution_is_single_pass() {
    assert_eq!(substitute("{0} / {1}", &["{1}", "x"]), "{1} / x");
}

#[test]
fn unknown_placeholders_are_kept() {
    assert_eq!(substitute("{0} {2} {name} {", &["a"]), "a {2} {name} {");
    assert_eq!(substitute("no placeholders", &["a"]), "no placeholders");
}

#[test]
fn repeated_and_unicode_placeholders() {
    assert_eq!(substitute("{0}は{0}", &["値"]), "値は値");
    assert_eq!(substitute("{1}{0}", &["b", "a"]), "ab");
}
