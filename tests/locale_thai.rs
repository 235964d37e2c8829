use std::time::SystemTime;

use vld_i18n::prelude::*;

fn th() -> Translations {
    vld_i18n::thai().unwrap()
}

#[test]
fn required() {
    let fe = FieldError::of::<String>("Name", "required");
    assert_eq!(th().translate(&fe), "จำเป็นต้องกรอกข้อมูล Name");
}

#[test]
fn strings_use_single_form() {
    let t = th();
    let fe = FieldError::of::<String>("Name", "len").with_param("1");
    assert_eq!(t.translate(&fe), "Name ต้องมีความยาว 1 ตัวอักษร");

    let fe = FieldError::of::<String>("Name", "len").with_param("12");
    assert_eq!(t.translate(&fe), "Name ต้องมีความยาว 12 ตัวอักษร");
}

#[test]
fn number() {
    let fe = FieldError::of::<f64>("LenNumber", "len").with_param("1113.00");
    assert_eq!(th().translate(&fe), "LenNumber ต้องเท่ากับ 1,113.00");
}

#[test]
fn items() {
    let fe = FieldError::of::<Vec<String>>("Tags", "max").with_param("4");
    assert_eq!(th().translate(&fe), "Tags ต้องประกอบไปด้วยไม่เกิน 4 รายการ");
}

#[test]
fn datetime() {
    let fe = FieldError::of::<SystemTime>("At", "gt");
    assert_eq!(th().translate(&fe), "At ต้องมากกว่าวันที่และเวลาปัจจุบัน");
}

#[test]
fn unique_is_not_localized() {
    let t = th();
    assert!(!t.has_tag("unique"));
    let fe = FieldError::of::<Vec<String>>("Tags", "unique");
    assert_eq!(t.translate(&fe), fe.to_string());
}

#[test]
fn tag_coverage() {
    let t = th();
    for tag in ["ulid", "fqdn", "cron", "json", "jwt", "image"] {
        assert!(t.has_tag(tag), "missing {tag}");
    }
}
