//! Indonesian messages.
//!
//! Indonesian nouns do not inflect for number: only `other` forms exist.

use crate::catalog::{Catalog, CompoundRule};
use crate::error::RegistrationError;
use crate::locales::Locale;
use crate::plural::PluralForms;
use crate::translations::Translations;
use crate::translator::Translator;

pub fn translator() -> Translator {
    Locale::Id.translator()
}

pub fn register_default_translations(
    translations: &mut Translations,
) -> Result<(), RegistrationError> {
    translations.register(&catalog())
}

pub fn catalog() -> Catalog {
    let characters = PluralForms::other("{0} karakter");
    let items = PluralForms::other("{0} item");

    Catalog::new(Locale::Id.code())
        .simple_all(
            &[
                "required",
                "required_if",
                "required_unless",
                "required_with",
                "required_with_all",
                "required_without",
                "required_without_all",
            ],
            "{0} wajib diisi",
        )
        .simple_all(
            &[
                "excluded_if",
                "excluded_unless",
                "excluded_with",
                "excluded_with_all",
                "excluded_without",
                "excluded_without_all",
            ],
            "{0} tidak boleh diisi",
        )
        .simple("isdefault", "{0} harus berupa nilai default")
        .compound(
            CompoundRule::new("len")
                .string("panjang {0} harus {1}", characters.clone())
                .number("{0} harus sama dengan {1}")
                .items("{0} harus berisi {1}", items.clone()),
        )
        .compound(
            CompoundRule::new("min")
                .string("panjang minimal {0} adalah {1}", characters.clone())
                .number("{0} harus {1} atau lebih besar")
                .items("panjang minimal {0} adalah {1}", items.clone()),
        )
        .compound(
            CompoundRule::new("max")
                .string("panjang maksimal {0} adalah {1}", characters.clone())
                .number("{0} harus {1} atau kurang")
                .items("{0} harus berisi maksimal {1}", items.clone()),
        )
        .simple("eq", "{0} tidak sama dengan {1}")
        .simple("ne", "{0} tidak boleh sama dengan {1}")
        .compound(
            CompoundRule::new("lt")
                .string("panjang {0} harus kurang dari {1}", characters.clone())
                .number("{0} harus kurang dari {1}")
                .items("{0} harus berisi kurang dari {1}", items.clone())
                .datetime("{0} harus kurang dari tanggal & waktu saat ini"),
        )
        .compound(
            CompoundRule::new("lte")
                .string("panjang maksimal {0} adalah {1}", characters.clone())
                .number("{0} harus {1} atau kurang")
                .items("{0} harus berisi maksimal {1}", items.clone())
                .datetime("{0} harus kurang dari atau sama dengan tanggal & waktu saat ini"),
        )
        .compound(
            CompoundRule::new("gt")
                .string("panjang {0} harus lebih dari {1}", characters.clone())
                .number("{0} harus lebih besar dari {1}")
                .items("{0} harus berisi lebih dari {1}", items.clone())
                .datetime("{0} harus lebih besar dari tanggal & waktu saat ini"),
        )
        .compound(
            CompoundRule::new("gte")
                .string("panjang minimal {0} adalah {1}", characters)
                .number("{0} harus {1} atau lebih besar")
                .items("{0} harus berisi setidaknya {1}", items)
                .datetime("{0} harus lebih besar dari atau sama dengan tanggal & waktu saat ini"),
        )
        .simple_all(&["eqfield", "eqcsfield"], "{0} harus sama dengan {1}")
        .simple_all(&["nefield", "necsfield"], "{0} tidak sama dengan {1}")
        .simple_all(&["gtfield", "gtcsfield"], "{0} harus lebih besar dari {1}")
        .simple_all(
            &["gtefield", "gtecsfield"],
            "{0} harus lebih besar dari atau sama dengan {1}",
        )
        .simple_all(&["ltfield", "ltcsfield"], "{0} harus kurang dari {1}")
        .simple_all(
            &["ltefield", "ltecsfield"],
            "{0} harus kurang dari atau sama dengan {1}",
        )
        .simple("alpha", "{0} hanya dapat berisi karakter abjad")
        .simple("alphanum", "{0} hanya dapat berisi karakter alfanumerik")
        .simple("numeric", "{0} harus berupa nilai numerik yang valid")
        .simple("number", "{0} harus berupa angka yang valid")
        .simple("hexadecimal", "{0} harus berupa heksadesimal yang valid")
        .simple("hexcolor", "{0} harus berupa warna HEX yang valid")
        .simple("rgb", "{0} harus berupa warna RGB yang valid")
        .simple("rgba", "{0} harus berupa warna RGBA yang valid")
        .simple("hsl", "{0} harus berupa warna HSL yang valid")
        .simple("hsla", "{0} harus berupa warna HSLA yang valid")
        .simple(
            "e164",
            "{0} harus berupa nomor telepon yang valid dengan format E.164",
        )
        .simple("email", "{0} harus berupa alamat email yang valid")
        .simple("url", "{0} harus berupa URL yang valid")
        .simple("uri", "{0} harus berupa URI yang valid")
        .simple("base64", "{0} harus berupa string Base64 yang valid")
        .simple("contains", "{0} harus berisi teks '{1}'")
        .simple(
            "containsany",
            "{0} harus berisi setidaknya salah satu karakter berikut '{1}'",
        )
        .simple("excludes", "{0} tidak boleh berisi teks '{1}'")
        .simple(
            "excludesall",
            "{0} tidak boleh berisi salah satu karakter berikut '{1}'",
        )
        .simple("excludesrune", "{0} tidak boleh berisi '{1}'")
        .simple("isbn", "{0} harus berupa nomor ISBN yang valid")
        .simple("isbn10", "{0} harus berupa nomor ISBN-10 yang valid")
        .simple("isbn13", "{0} harus berupa nomor ISBN-13 yang valid")
        .simple("issn", "{0} harus berupa nomor ISSN yang valid")
        .simple("uuid", "{0} harus berupa UUID yang valid")
        .simple("uuid3", "{0} harus berupa UUID versi 3 yang valid")
        .simple("uuid4", "{0} harus berupa UUID versi 4 yang valid")
        .simple("uuid5", "{0} harus berupa UUID versi 5 yang valid")
        .simple("ulid", "{0} harus berupa ULID yang valid")
        .simple("ascii", "{0} hanya boleh berisi karakter ascii")
        .simple(
            "printascii",
            "{0} hanya boleh berisi karakter ascii yang dapat dicetak",
        )
        .simple("multibyte", "{0} harus berisi karakter multibyte")
        .simple("datauri", "{0} harus berisi URI Data yang valid")
        .simple("latitude", "{0} harus berisi koordinat lintang yang valid")
        .simple("longitude", "{0} harus berisi koordinat bujur yang valid")
        .simple("ssn", "{0} harus berupa nomor SSN yang valid")
        .simple("ipv4", "{0} harus berupa alamat IPv4 yang valid")
        .simple("ipv6", "{0} harus berupa alamat IPv6 yang valid")
        .simple("ip", "{0} harus berupa alamat IP yang valid")
        .simple("cidr", "{0} harus berisi notasi CIDR yang valid")
        .simple(
            "cidrv4",
            "{0} harus berisi notasi CIDR yang valid untuk alamat IPv4",
        )
        .simple(
            "cidrv6",
            "{0} harus berisi notasi CIDR yang valid untuk alamat IPv6",
        )
        .simple("tcp_addr", "{0} harus berupa alamat TCP yang valid")
        .simple("tcp4_addr", "{0} harus berupa alamat TCP IPv4 yang valid")
        .simple("tcp6_addr", "{0} harus berupa alamat TCP IPv6 yang valid")
        .simple("udp_addr", "{0} harus berupa alamat UDP yang valid")
        .simple("udp4_addr", "{0} harus berupa alamat UDP IPv4 yang valid")
        .simple("udp6_addr", "{0} harus berupa alamat UDP IPv6 yang valid")
        .simple("ip_addr", "{0} harus berupa alamat IP yang dapat dipecahkan")
        .simple("ip4_addr", "{0} harus berupa alamat IPv4 yang dapat dipecahkan")
        .simple("ip6_addr", "{0} harus berupa alamat IPv6 yang dapat dipecahkan")
        .simple(
            "unix_addr",
            "{0} harus berupa alamat UNIX yang dapat dipecahkan",
        )
        .simple("mac", "{0} harus berisi alamat MAC yang valid")
        .simple("unique", "{0} harus berisi nilai-nilai yang unik")
        .simple("iscolor", "{0} harus berupa warna yang valid")
        .simple("oneof", "{0} harus berupa salah satu dari [{1}]")
        .simple("json", "{0} harus berupa string json yang valid")
        .simple("lowercase", "{0} harus berupa huruf kecil")
        .simple("uppercase", "{0} harus berupa huruf besar")
        .simple("datetime", "{0} tidak sesuai dengan format {1}")
        .simple("boolean", "{0} harus berupa nilai boolean yang valid")
        .simple("image", "{0} harus berupa gambar yang valid")
}
