use std::time::SystemTime;

use vld_i18n::prelude::*;

fn id() -> Translations {
    vld_i18n::indonesian().unwrap()
}

#[test]
fn len_number_uses_dot_grouping() {
    let fe = FieldError::of::<f64>("LenNumber", "len").with_param("1113.00");
    assert_eq!(id().translate(&fe), "LenNumber harus sama dengan 1.113,00");
}

#[test]
fn strings_use_single_form() {
    let t = id();
    let fe = FieldError::of::<String>("MinString", "min").with_param("1");
    assert_eq!(t.translate(&fe), "panjang minimal MinString adalah 1 karakter");

    let fe = FieldError::of::<String>("MinString", "min").with_param("5");
    assert_eq!(t.translate(&fe), "panjang minimal MinString adalah 5 karakter");
}

#[test]
fn items() {
    let fe = FieldError::of::<Vec<String>>("GteMultiple", "gte").with_param("1");
    assert_eq!(
        id().translate(&fe),
        "GteMultiple harus berisi setidaknya 1 item"
    );
}

#[test]
fn datetime() {
    let fe = FieldError::of::<SystemTime>("LtTime", "lt");
    assert_eq!(
        id().translate(&fe),
        "LtTime harus kurang dari tanggal & waktu saat ini"
    );
}

#[test]
fn required() {
    let fe = FieldError::of::<String>("Name", "required");
    assert_eq!(id().translate(&fe), "Name wajib diisi");
}

#[test]
fn missing_tags_fall_back() {
    let t = id();
    assert!(t.has_tag("ulid"));
    for tag in ["fqdn", "cron", "jwt", "cve"] {
        let fe = FieldError::of::<String>("Value", tag);
        assert_eq!(t.translate(&fe), fe.to_string());
    }
}
