//! Arabic messages.
//!
//! Only the `one`/`other` noun forms are registered; numbers use the Arabic
//! decimal and group separators.

use crate::catalog::{Catalog, CompoundRule};
use crate::error::RegistrationError;
use crate::locales::Locale;
use crate::plural::PluralForms;
use crate::translations::Translations;
use crate::translator::Translator;

pub fn translator() -> Translator {
    Locale::Ar.translator()
}

pub fn register_default_translations(
    translations: &mut Translations,
) -> Result<(), RegistrationError> {
    translations.register(&catalog())
}

pub fn catalog() -> Catalog {
    let characters = PluralForms::new("{0} حرف", "{0} أحرف");
    let items = PluralForms::new("{0} عنصر", "{0} عناصر");

    Catalog::new(Locale::Ar.code())
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
            "حقل {0} مطلوب",
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
            "حقل {0} مستبعد",
        )
        .simple("isdefault", "يجب أن يكون {0} القيمة الافتراضية")
        .compound(
            CompoundRule::new("len")
                .string("يجب أن يكون طول {0} مساويا ل {1}", characters.clone())
                .number("يجب أن يكون {0} مساويا ل {1}")
                .items("يجب أن يحتوي {0} على {1}", items.clone()),
        )
        .compound(
            CompoundRule::new("min")
                .string("يجب أن يكون طول {0} {1} على الأقل", characters.clone())
                .number("يجب أن يكون {0} {1} أو أكبر")
                .items("يجب أن يحتوي {0} على {1} على الأقل", items.clone()),
        )
        .compound(
            CompoundRule::new("max")
                .string("يجب أن يكون طول {0} بحد أقصى {1}", characters.clone())
                .number("يجب أن يكون {0} {1} أو أقل")
                .items("يجب أن يحتوي {0} على {1} كحد أقصى", items.clone()),
        )
        .simple("eq", "{0} لا يساوي {1}")
        .simple("ne", "يجب ألا يساوي {0} {1}")
        .compound(
            CompoundRule::new("lt")
                .string("يجب أن يكون طول {0} أقل من {1}", characters.clone())
                .number("يجب أن يكون {0} أقل من {1}")
                .items("يجب أن يحتوي {0} على أقل من {1}", items.clone())
                .datetime("يجب أن يكون {0} أقل من التاريخ والوقت الحاليين"),
        )
        .compound(
            CompoundRule::new("lte")
                .string("يجب أن يكون طول {0} كحد أقصى {1}", characters.clone())
                .number("يجب أن يكون {0} {1} أو أقل")
                .items("يجب أن يحتوي {0} على {1} كحد أقصى", items.clone())
                .datetime("يجب أن يكون {0} أقل من أو يساوي التاريخ والوقت الحاليين"),
        )
        .compound(
            CompoundRule::new("gt")
                .string("يجب أن يكون طول {0} أكبر من {1}", characters.clone())
                .number("يجب أن يكون {0} أكبر من {1}")
                .items("يجب أن يحتوي {0} على أكثر من {1}", items.clone())
                .datetime("يجب أن يكون {0} أكبر من التاريخ والوقت الحاليين"),
        )
        .compound(
            CompoundRule::new("gte")
                .string("يجب أن يكون طول {0} على الأقل {1}", characters)
                .number("يجب أن يكون {0} {1} أو أكبر")
                .items("يجب أن يحتوي {0} على {1} على الأقل", items)
                .datetime("يجب أن يكون {0} أكبر من أو يساوي التاريخ والوقت الحاليين"),
        )
        .simple_all(&["eqfield", "eqcsfield"], "يجب أن يكون {0} مساويا ل {1}")
        .simple_all(&["nefield", "necsfield"], "لا يمكن أن يساوي {0} {1}")
        .simple_all(&["gtfield", "gtcsfield"], "يجب أن يكون {0} أكبر من {1}")
        .simple_all(
            &["gtefield", "gtecsfield"],
            "يجب أن يكون {0} أكبر من أو يساوي {1}",
        )
        .simple_all(&["ltfield", "ltcsfield"], "يجب أن يكون {0} أقل من {1}")
        .simple_all(
            &["ltefield", "ltecsfield"],
            "يجب أن يكون {0} أقل من أو يساوي {1}",
        )
        .simple("alpha", "يمكن أن يحتوي {0} على أحرف أبجدية فقط")
        .simple("alphanum", "يمكن أن يحتوي {0} على أحرف أبجدية رقمية فقط")
        .simple("numeric", "يجب أن يكون {0} قيمة رقمية صالحة")
        .simple("number", "يجب أن يكون {0} رقما صالحا")
        .simple("hexadecimal", "يجب أن يكون {0} رقما سداسيا عشريا صالحا")
        .simple("hexcolor", "يجب أن يكون {0} لون HEX صالح")
        .simple("rgb", "يجب أن يكون {0} لون RGB صالح")
        .simple("rgba", "يجب أن يكون {0} لون RGBA صالح")
        .simple("hsl", "يجب أن يكون {0} لون HSL صالح")
        .simple("hsla", "يجب أن يكون {0} لون HSLA صالح")
        .simple("e164", "يجب أن يكون {0} رقم هاتف صالح بتنسيق E.164")
        .simple("email", "يجب أن يكون {0} عنوان بريد إلكتروني صالح")
        .simple("url", "يجب أن يكون {0} رابط إنترنت صالح")
        .simple("uri", "يجب أن يكون {0} URI صالح")
        .simple("base64", "يجب أن يكون {0} سلسلة Base64 صالحة")
        .simple("contains", "يجب أن يحتوي {0} على النص '{1}'")
        .simple(
            "containsany",
            "يجب أن يحتوي {0} على حرف واحد على الأقل من الأحرف التالية '{1}'",
        )
        .simple("excludes", "لا يمكن أن يحتوي {0} على النص '{1}'")
        .simple(
            "excludesall",
            "لا يمكن أن يحتوي {0} على أي من الأحرف التالية '{1}'",
        )
        .simple("excludesrune", "لا يمكن أن يحتوي {0} على التالي '{1}'")
        .simple("isbn", "يجب أن يكون {0} رقم ISBN صالح")
        .simple("isbn10", "يجب أن يكون {0} رقم ISBN-10 صالح")
        .simple("isbn13", "يجب أن يكون {0} رقم ISBN-13 صالح")
        .simple("issn", "يجب أن يكون {0} رقم ISSN صالح")
        .simple("uuid", "يجب أن يكون {0} UUID صالح")
        .simple("uuid3", "يجب أن يكون {0} UUID صالح من النسخة 3")
        .simple("uuid4", "يجب أن يكون {0} UUID صالح من النسخة 4")
        .simple("uuid5", "يجب أن يكون {0} UUID صالح من النسخة 5")
        .simple("ulid", "يجب أن يكون {0} ULID صالح")
        .simple("ascii", "يجب أن يحتوي {0} على أحرف ascii فقط")
        .simple("printascii", "يجب أن يحتوي {0} على أحرف ascii قابلة للطباعة فقط")
        .simple("multibyte", "يجب أن يحتوي {0} على أحرف متعددة البايت")
        .simple("datauri", "يجب أن يحتوي {0} على URI صالح للبيانات")
        .simple("latitude", "يجب أن يحتوي {0} على إحداثيات خط عرض صالحة")
        .simple("longitude", "يجب أن يحتوي {0} على إحداثيات خط طول صالحة")
        .simple("ssn", "يجب أن يكون {0} رقم SSN صالح")
        .simple("ipv4", "يجب أن يكون {0} عنوان IPv4 صالح")
        .simple("ipv6", "يجب أن يكون {0} عنوان IPv6 صالح")
        .simple("ip", "يجب أن يكون {0} عنوان IP صالح")
        .simple("cidr", "يجب أن يحتوي {0} على علامة CIDR صالحة")
        .simple("cidrv4", "يجب أن يحتوي {0} على علامة CIDR صالحة لعنوان IPv4")
        .simple("cidrv6", "يجب أن يحتوي {0} على علامة CIDR صالحة لعنوان IPv6")
        .simple("tcp_addr", "يجب أن يكون {0} عنوان TCP صالح")
        .simple("tcp4_addr", "يجب أن يكون {0} عنوان IPv4 TCP صالح")
        .simple("tcp6_addr", "يجب أن يكون {0} عنوان IPv6 TCP صالح")
        .simple("udp_addr", "يجب أن يكون {0} عنوان UDP صالح")
        .simple("udp4_addr", "يجب أن يكون {0} عنوان IPv4 UDP صالح")
        .simple("udp6_addr", "يجب أن يكون {0} عنوان IPv6 UDP صالح")
        .simple("ip_addr", "يجب أن يكون {0} عنوان IP قابل للحل")
        .simple("ip4_addr", "يجب أن يكون {0} عنوان IPv4 قابل للحل")
        .simple("ip6_addr", "يجب أن يكون {0} عنوان IPv6 قابل للحل")
        .simple("unix_addr", "يجب أن يكون {0} عنوان UNIX قابل للحل")
        .simple("mac", "يجب أن يحتوي {0} على عنوان MAC صالح")
        .simple("fqdn", "يجب أن يكون {0} اسم نطاق مؤهل بالكامل صالح")
        .simple("unique", "يجب أن يحتوي {0} على قيم فريدة")
        .simple("iscolor", "يجب أن يكون {0} لونا صالحا")
        .simple("cron", "يجب أن يكون {0} تعبير cron صالح")
        .simple("oneof", "يجب أن يكون {0} واحدا من [{1}]")
        .simple("json", "يجب أن يكون {0} نص json صالح")
        .simple("jwt", "يجب أن يكون {0} نص jwt صالح")
        .simple("lowercase", "يجب أن يكون {0} نصا بأحرف صغيرة")
        .simple("uppercase", "يجب أن يكون {0} نصا بأحرف كبيرة")
        .simple("datetime", "لا يتطابق {0} مع تنسيق {1}")
        .simple(
            "postcode_iso3166_alpha2",
            "لا يتطابق {0} مع تنسيق الرمز البريدي للدولة {1}",
        )
        .simple(
            "postcode_iso3166_alpha2_field",
            "لا يتطابق {0} مع تنسيق الرمز البريدي للدولة في حقل {1}",
        )
        .simple("boolean", "يجب أن يكون {0} قيمة منطقية صالحة")
        .simple("image", "يجب أن تكون {0} صورة صالحة")
}
