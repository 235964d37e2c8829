use std::time::SystemTime;

use vld_i18n::prelude::*;

fn en() -> Translations {
    vld_i18n::english().unwrap()
}

// ---------------------------------------------------------------------------
// Simple tags
// ---------------------------------------------------------------------------

#[test]
fn required_family_shares_template() {
    let t = en();
    for tag in ["required", "required_if", "required_without_all"] {
        let fe = FieldError::of::<String>("Name", tag);
        assert_eq!(t.translate(&fe), "Name is a required field");
    }
}

#[test]
fn simple_tag_substitutes_raw_param() {
    let t = en();
    let fe = FieldError::of::<String>("Color", "oneof").with_param("red green");
    assert_eq!(t.translate(&fe), "Color must be one of [red green]");

    let fe = FieldError::of::<String>("Handle", "contains").with_param("@");
    assert_eq!(t.translate(&fe), "Handle must contain the text '@'");
}

#[test]
fn field_comparison_tags() {
    let t = en();
    let fe = FieldError::of::<i32>("Confirm", "eqfield").with_param("Password");
    assert_eq!(t.translate(&fe), "Confirm must be equal to Password");

    let fe = FieldError::of::<i32>("End", "gtefield").with_param("Start");
    assert_eq!(t.translate(&fe), "End must be greater than or equal to Start");
}

#[test]
fn simple_tag_ignores_kind() {
    let t = en();
    let fe = FieldError::new("Email", "email").with_kind(ValueKind::opaque_struct());
    assert_eq!(t.translate(&fe), "Email must be a valid email address");
}

// ---------------------------------------------------------------------------
// Compound tags
// ---------------------------------------------------------------------------

#[test]
fn min_string_singular_and_plural() {
    let t = en();
    let fe = FieldError::of::<String>("MinString", "min").with_param("1");
    assert_eq!(
        t.translate(&fe),
        "MinString must be at least 1 character in length"
    );

    let fe = FieldError::of::<String>("MinString", "min").with_param("3");
    assert_eq!(
        t.translate(&fe),
        "MinString must be at least 3 characters in length"
    );
}

#[test]
fn decimal_one_is_plural() {
    let t = en();
    let fe = FieldError::of::<String>("Name", "max").with_param("1.0");
    assert_eq!(
        t.translate(&fe),
        "Name must be a maximum of 1.0 characters in length"
    );
}

#[test]
fn zero_is_plural() {
    let t = en();
    let fe = FieldError::of::<String>("Name", "len").with_param("0");
    assert_eq!(t.translate(&fe), "Name must be 0 characters in length");
}

#[test]
fn len_number_keeps_fraction_digits() {
    let t = en();
    let fe = FieldError::of::<f64>("LenNumber", "len").with_param("1113.00");
    assert_eq!(t.translate(&fe), "LenNumber must be equal to 1,113.00");
}

#[test]
fn gte_number_integer() {
    let t = en();
    let fe = FieldError::of::<u32>("Age", "gte").with_param("18");
    assert_eq!(t.translate(&fe), "Age must be 18 or greater");
}

#[test]
fn lt_number_negative() {
    let t = en();
    let fe = FieldError::of::<i64>("Delta", "lt").with_param("-1500");
    assert_eq!(t.translate(&fe), "Delta must be less than -1,500");
}

#[test]
fn collections_count_items() {
    let t = en();
    let fe = FieldError::of::<Vec<String>>("MinMultiple", "min").with_param("1");
    assert_eq!(t.translate(&fe), "MinMultiple must contain at least 1 item");

    let fe = FieldError::of::<[u8; 4]>("LenArray", "len").with_param("2");
    assert_eq!(t.translate(&fe), "LenArray must contain 2 items");

    let fe = FieldError::of::<std::collections::HashMap<String, i32>>("Labels", "gt")
        .with_param("5");
    assert_eq!(t.translate(&fe), "Labels must contain more than 5 items");
}

#[test]
fn pointer_resolves_to_pointee() {
    let t = en();
    let fe = FieldError::of::<Option<String>>("Nick", "lte").with_param("10");
    assert_eq!(t.translate(&fe), "Nick must be at maximum 10 characters in length");

    let fe = FieldError::of::<Option<Box<Vec<i32>>>>("Ids", "max").with_param("2");
    assert_eq!(t.translate(&fe), "Ids must contain at maximum 2 items");
}

#[test]
fn datetime_variants() {
    let t = en();
    let cases = [
        ("lt", "LtTime must be less than the current Date & Time"),
        ("lte", "LtTime must be less than or equal to the current Date & Time"),
        ("gt", "LtTime must be greater than the current Date & Time"),
        ("gte", "LtTime must be greater than or equal to the current Date & Time"),
    ];
    for (tag, expected) in cases {
        let fe = FieldError::of::<SystemTime>("LtTime", tag);
        assert_eq!(t.translate(&fe), expected);
    }
}

#[test]
fn bool_formats_as_number() {
    let t = en();
    let fe = FieldError::of::<bool>("Flag", "max").with_param("1");
    assert_eq!(t.translate(&fe), "Flag must be 1 or less");
}

#[test]
fn json_values_pick_their_kind() {
    let t = en();
    let value = serde_json::json!(["a", "b"]);
    let fe = FieldError::for_json("Tags", "min", &value).with_param("3");
    assert_eq!(t.translate(&fe), "Tags must contain at least 3 items");

    let value = serde_json::json!("ab");
    let fe = FieldError::for_json("Code", "len", &value).with_param("4");
    assert_eq!(t.translate(&fe), "Code must be 4 characters in length");
}

// ---------------------------------------------------------------------------
// Coverage
// ---------------------------------------------------------------------------

#[test]
fn covers_compound_tags() {
    let t = en();
    for tag in ["len", "min", "max", "lt", "lte", "gt", "gte"] {
        assert!(
            matches!(t.formatter(tag), Some(TagFormatter::Compound(_))),
            "{tag} should be compound"
        );
    }
    assert_eq!(t.formatter("email"), Some(&TagFormatter::Simple));
}

#[test]
fn len_has_no_datetime_variant() {
    let t = en();
    match t.formatter("len") {
        Some(TagFormatter::Compound(keys)) => assert!(keys.datetime.is_none()),
        other => panic!("unexpected formatter: {other:?}"),
    }
}

#[test]
fn english_only_tags() {
    let t = en();
    for tag in ["ulid", "cve", "cron", "jwt", "postcode_iso3166_alpha2"] {
        assert!(t.has_tag(tag), "missing {tag}");
    }
}
