use vld_i18n::locales::english;
use vld_i18n::prelude::*;

fn min_rule(characters: PluralForms) -> CompoundRule {
    CompoundRule::new("min")
        .string("{0} must be at least {1} in length", characters)
        .number("{0} must be {1} or greater")
        .items("{0} must contain at least {1}", PluralForms::other("{0} items"))
}

// ---------------------------------------------------------------------------
// Built-in catalogs
// ---------------------------------------------------------------------------

#[test]
fn every_locale_registers() {
    for locale in Locale::ALL {
        let t = locale.translations().unwrap();
        assert_eq!(t.locale(), locale.code());
        assert!(t.has_tag("required"), "{locale} lacks required");
        for tag in ["len", "min", "max", "lt", "lte", "gt", "gte"] {
            assert!(
                matches!(t.formatter(tag), Some(TagFormatter::Compound(_))),
                "{locale}: {tag} should be compound"
            );
        }
        t.translator().verify().unwrap();
    }
}

#[test]
fn every_bound_tag_translates() {
    for locale in Locale::ALL {
        let t = locale.translations().unwrap();
        for tag in t.tags() {
            for fe in [
                FieldError::of::<String>("Field", tag).with_param("3"),
                FieldError::of::<Vec<i32>>("Field", tag).with_param("1"),
                FieldError::of::<f64>("Field", tag).with_param("2.50"),
            ] {
                let message = t.try_translate(&fe).unwrap();
                assert!(!message.is_empty(), "{locale}: {tag}");
                assert!(message.contains("Field"), "{locale}: {tag} -> {message}");
            }
        }
    }
}

#[test]
fn translations_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Translations>();
}

#[test]
fn bound_tags_match_catalog() {
    for locale in Locale::ALL {
        let catalog = locale.catalog();
        let t = locale.translations().unwrap();
        let mut expected: Vec<&str> = catalog.tags().collect();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(t.tags(), expected, "{locale}");
    }
}

#[test]
fn catalog_lookup() {
    let catalog = english::catalog();
    assert_eq!(catalog.locale(), "en");
    assert!(matches!(catalog.get("min"), Some(RuleEntry::Compound(_))));
    match catalog.get("email") {
        Some(RuleEntry::Simple(rule)) => {
            assert_eq!(rule.template, "{0} must be a valid email address");
            assert!(!rule.override_existing);
        }
        other => panic!("unexpected entry: {other:?}"),
    }
    assert!(catalog.get("no_such_tag").is_none());
}

#[test]
fn register_default_translations_into_fresh_translator() {
    let mut t = Translations::new(english::translator());
    english::register_default_translations(&mut t).unwrap();
    let fe = FieldError::of::<String>("Name", "required");
    assert_eq!(t.translate(&fe), "Name is a required field");
}

// ---------------------------------------------------------------------------
// Conflicts and overrides
// ---------------------------------------------------------------------------

#[test]
fn duplicate_simple_conflicts() {
    let err = Catalog::new("en")
        .simple("required", "{0} is required")
        .simple("required", "{0} is mandatory")
        .build(Locale::En.translator())
        .unwrap_err();
    assert_eq!(
        err,
        RegistrationError::Conflict {
            locale: "en".into(),
            key: "required".into(),
        }
    );
}

#[test]
fn registering_twice_conflicts() {
    let mut t = vld_i18n::english().unwrap();
    let err = english::register_default_translations(&mut t).unwrap_err();
    assert!(matches!(err, RegistrationError::Conflict { ref key, .. } if key == "required"));
}

#[test]
fn override_replaces_template() {
    let t = english::catalog()
        .simple_override("required", "{0} cannot be empty")
        .build(english::translator())
        .unwrap();
    let fe = FieldError::of::<String>("Name", "required");
    assert_eq!(t.translate(&fe), "Name cannot be empty");
}

#[test]
fn compound_override_replaces_every_key() {
    let t = english::catalog()
        .compound(
            min_rule(PluralForms::new("{0} letter", "{0} letters"))
                .override_existing(),
        )
        .build(english::translator())
        .unwrap();
    let fe = FieldError::of::<String>("Name", "min").with_param("1");
    assert_eq!(t.translate(&fe), "Name must be at least 1 letter in length");
}

#[test]
fn extend_appends_entries() {
    let extra = Catalog::new("en").simple("slug", "{0} must be a valid slug");
    let t = english::catalog()
        .extend(extra)
        .build(english::translator())
        .unwrap();
    let fe = FieldError::of::<String>("Path", "slug");
    assert_eq!(t.translate(&fe), "Path must be a valid slug");
}

#[test]
fn failure_keeps_earlier_entries() {
    let catalog = Catalog::new("en")
        .simple("a", "{0} a")
        .simple("a", "{0} again")
        .simple("b", "{0} b");

    let mut t = Translations::new(Locale::En.translator());
    assert!(t.register(&catalog).is_err());
    assert!(t.has_tag("a"));
    assert!(!t.has_tag("b"));
    assert_eq!(t.translator().template("a"), Some("{0} a"));
}

// ---------------------------------------------------------------------------
// Invalid rules
// ---------------------------------------------------------------------------

#[test]
fn compound_requires_string_number_and_items() {
    let err = Catalog::new("en")
        .compound(CompoundRule::new("min").number("{0} must be {1} or greater"))
        .build(Locale::En.translator())
        .unwrap_err();
    assert_eq!(
        err,
        RegistrationError::IncompleteRule {
            locale: "en".into(),
            tag: "min".into(),
            variant: "string",
        }
    );

    let err = Catalog::new("en")
        .compound(
            CompoundRule::new("min")
                .string("{0}", PluralForms::new("{0} a", "{0} b"))
                .number("{0}"),
        )
        .build(Locale::En.translator())
        .unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::IncompleteRule { variant: "items", .. }
    ));
}

#[test]
fn one_form_rejected_without_singular() {
    let err = Catalog::new("ja")
        .compound(min_rule(PluralForms::new("{0} character", "{0} characters")))
        .build(Locale::Ja.translator())
        .unwrap_err();
    assert_eq!(
        err,
        RegistrationError::UnsupportedPluralRule {
            locale: "ja".into(),
            key: "min-string-character".into(),
            rule: PluralRule::One,
        }
    );
}

#[test]
fn cardinal_needs_quantity_placeholder() {
    let err = Catalog::new("en")
        .compound(min_rule(PluralForms::new("one character", "{0} characters")))
        .build(Locale::En.translator())
        .unwrap_err();
    assert!(matches!(err, RegistrationError::MissingPlaceholder { .. }));
    assert!(err.to_string().contains("'{0}'"));
}

#[test]
fn verify_reports_missing_one_form() {
    let t = Catalog::new("en")
        .compound(min_rule(PluralForms::other("{0} characters")))
        .build(Locale::En.translator())
        .unwrap();
    let err = t.translator().verify().unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::IncompleteCardinal { rule: PluralRule::One, .. }
    ));

    // Lookup still works through the `other` fallback.
    let fe = FieldError::of::<String>("Name", "min").with_param("1");
    assert_eq!(t.translate(&fe), "Name must be at least 1 characters in length");
}

// ---------------------------------------------------------------------------
// Translator
// ---------------------------------------------------------------------------

#[test]
fn translator_plain_and_cardinal() {
    let mut t = Translator::new("en", PluralRules::OneOther, NumberFormat::ENGLISH);
    assert!(t.is_empty());
    t.add("greet", "hello {0}", false).unwrap();
    t.add_cardinal("apples", "{0} apple", PluralRule::One, false).unwrap();
    t.add_cardinal("apples", "{0} apples", PluralRule::Other, false).unwrap();

    assert_eq!(t.len(), 2);
    assert!(t.contains("greet"));
    assert!(t.contains_cardinal("apples"));
    assert_eq!(t.translate("greet", &["you"]).unwrap(), "hello you");
    assert_eq!(t.cardinal("apples", 1.0, 0, "1").unwrap(), "1 apple");
    assert_eq!(t.cardinal("apples", 2.0, 0, "2").unwrap(), "2 apples");

    assert!(matches!(
        t.translate("missing", &[]),
        Err(TranslateError::UnknownKey { .. })
    ));
    assert!(matches!(
        t.cardinal("missing", 1.0, 0, "1"),
        Err(TranslateError::UnknownKey { .. })
    ));
    assert!(t.add_cardinal("apples", "{0} pommes", PluralRule::Other, false).is_err());
    t.add_cardinal("apples", "{0} pommes", PluralRule::Other, true).unwrap();
    assert_eq!(t.cardinal("apples", 3.0, 0, "3").unwrap(), "3 pommes");
}

#[test]
fn export_is_sorted_and_stable() {
    let a = vld_i18n::english().unwrap().translator().export();
    assert_eq!(a["locale"], "en");
    assert_eq!(a["templates"]["min-string"], "{0} must be at least {1} in length");
    assert_eq!(a["templates"]["min-string-character"]["one"], "{0} character");
    assert_eq!(a["templates"]["min-string-character"]["other"], "{0} characters");
    assert!(a["templates"].get("len-datetime").is_none());
    assert_eq!(
        a["templates"]["lt-datetime"],
        "{0} must be less than the current Date & Time"
    );
}

#[test]
fn independent_registrations_agree() {
    let samples = [
        FieldError::of::<String>("Name", "required"),
        FieldError::of::<String>("Name", "min").with_param("1"),
        FieldError::of::<String>("Name", "max").with_param("12"),
        FieldError::of::<f64>("Price", "len").with_param("1113.00"),
        FieldError::of::<i64>("Delta", "lt").with_param("-1500"),
        FieldError::of::<Vec<String>>("Tags", "gte").with_param("2"),
        FieldError::of::<std::time::SystemTime>("At", "gt"),
        FieldError::of::<String>("Color", "oneof").with_param("red green"),
        FieldError::of::<String>("Name", "no_such_tag"),
    ];
    for locale in Locale::ALL {
        let a = locale.translations().unwrap();
        let b = locale.translations().unwrap();
        assert_eq!(a.translator().export(), b.translator().export(), "{locale}");
        assert_eq!(a.tags(), b.tags(), "{locale}");
        for fe in &samples {
            assert_eq!(a.translate(fe), b.translate(fe), "{locale}: {}", fe.tag());
        }
    }
}

// ---------------------------------------------------------------------------
// Locale lookup
// ---------------------------------------------------------------------------

#[test]
fn locale_from_str() {
    assert_eq!("fr".parse::<Locale>().unwrap(), Locale::Fr);
    assert_eq!("fr-CA".parse::<Locale>().unwrap(), Locale::Fr);
    assert_eq!("JA_jp".parse::<Locale>().unwrap(), Locale::Ja);
    let err = "xx".parse::<Locale>().unwrap_err();
    assert_eq!(err.to_string(), "unsupported locale 'xx'");
    assert_eq!(Locale::Nl.to_string(), "nl");
}

#[test]
fn for_locale_shortcut() {
    let t = vld_i18n::for_locale("th-TH").unwrap();
    assert_eq!(t.locale(), "th");
    assert!(matches!(
        vld_i18n::for_locale("de"),
        Err(vld_i18n::error::Error::UnknownLocale(_))
    ));
}

#[cfg(feature = "serialize")]
#[test]
fn catalog_serializes() {
    let value = serde_json::to_value(Catalog::new("en").simple("required", "{0}!")).unwrap();
    assert_eq!(value["locale"], "en");
    assert_eq!(value["entries"][0]["Simple"]["tag"], "required");
}
