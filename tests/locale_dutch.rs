use std::time::SystemTime;

use vld_i18n::prelude::*;

fn nl() -> Translations {
    vld_i18n::dutch().unwrap()
}

#[test]
fn len_number_fraction_and_grouping() {
    let fe = FieldError::of::<f64>("LenNumber", "len").with_param("1113.00");
    assert_eq!(nl().translate(&fe), "LenNumber moet gelijk zijn aan 1,113.00");
}

#[test]
fn strings() {
    let t = nl();
    let fe = FieldError::of::<String>("MinString", "min").with_param("1");
    assert_eq!(t.translate(&fe), "MinString moet tenminste 1 karakter lang zijn");

    let fe = FieldError::of::<String>("LenString", "len").with_param("4");
    assert_eq!(t.translate(&fe), "LenString moet 4 karakters lang zijn");
}

#[test]
fn items() {
    let t = nl();
    let fe = FieldError::of::<Vec<i32>>("MaxMultiple", "max").with_param("3");
    assert_eq!(t.translate(&fe), "MaxMultiple mag maximaal 3 items bevatten");

    let fe = FieldError::of::<Vec<i32>>("GtMultiple", "gt").with_param("1");
    assert_eq!(t.translate(&fe), "GtMultiple moet meer dan 1 item bevatten");
}

#[test]
fn datetime() {
    let fe = FieldError::of::<SystemTime>("LtTime", "lt");
    assert_eq!(
        nl().translate(&fe),
        "LtTime moet kleiner zijn dan de huidige datum & tijd"
    );
}

#[test]
fn required() {
    let fe = FieldError::of::<String>("Name", "required_with").with_param("Other");
    assert_eq!(nl().translate(&fe), "Name is een verplicht veld");
}

#[test]
fn missing_tags_fall_back() {
    let t = nl();
    for tag in ["isdefault", "e164", "json", "datetime"] {
        assert!(!t.has_tag(tag), "unexpected {tag}");
        let fe = FieldError::of::<String>("Value", tag);
        assert_eq!(t.translate(&fe), fe.to_string());
    }
}
