//! Thai messages.

use crate::catalog::{Catalog, CompoundRule};
use crate::error::RegistrationError;
use crate::locales::Locale;
use crate::plural::PluralForms;
use crate::translations::Translations;
use crate::translator::Translator;

pub fn translator() -> Translator {
    Locale::Th.translator()
}

pub fn register_default_translations(
    translations: &mut Translations,
) -> Result<(), RegistrationError> {
    translations.register(&catalog())
}

pub fn catalog() -> Catalog {
    let characters = PluralForms::other("{0} ตัวอักษร");
    let items = PluralForms::other("{0} รายการ");

    Catalog::new(Locale::Th.code())
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
            "จำเป็นต้องกรอกข้อมูล {0}",
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
            "{0} เป็นฟิลด์ที่ถูกยกเว้น",
        )
        .simple("isdefault", "{0} ต้องเป็นค่าเริ่มต้น")
        .compound(
            CompoundRule::new("len")
                .string("{0} ต้องมีความยาว {1}", characters.clone())
                .number("{0} ต้องเท่ากับ {1}")
                .items("{0} ต้องประกอบไปด้วย {1}", items.clone()),
        )
        .compound(
            CompoundRule::new("min")
                .string("{0} ต้องมีความยาวอย่างน้อย {1}", characters.clone())
                .number("{0} ต้องมีค่าอย่างน้อย {1}")
                .items("{0} ต้องประกอบไปด้วยอย่างน้อย {1}", items.clone()),
        )
        .compound(
            CompoundRule::new("max")
                .string("{0} ต้องมีความยาวไม่เกิน {1}", characters.clone())
                .number("{0} ต้องมีค่าไม่เกิน {1}")
                .items("{0} ต้องประกอบไปด้วยไม่เกิน {1}", items.clone()),
        )
        .simple("eq", "{0} ไม่เท่ากับ {1}")
        .simple("ne", "{0} ต้องไม่เท่ากับ {1}")
        .compound(
            CompoundRule::new("lt")
                .string("{0} ต้องมีความยาวน้อยกว่า {1}", characters.clone())
                .number("{0} ต้องน้อยกว่า {1}")
                .items("{0} ต้องประกอบไปด้วยน้อยกว่า {1}", items.clone())
                .datetime("{0} ต้องน้อยกว่าวันที่และเวลาปัจจุบัน"),
        )
        .compound(
            CompoundRule::new("lte")
                .string("{0} ต้องมีความยาวไม่เกิน {1}", characters.clone())
                .number("{0} ต้องมีค่าไม่เกิน {1}")
                .items("{0} ต้องประกอบไปด้วยไม่เกิน {1}", items.clone())
                .datetime("{0} ต้องน้อยกว่าหรือเท่ากับวันที่และเวลาปัจจุบัน"),
        )
        .compound(
            CompoundRule::new("gt")
                .string("{0} ต้องมีความยาวมากกว่า {1}", characters.clone())
                .number("{0} ต้องมากกว่า {1}")
                .items("{0} ต้องประกอบไปด้วยมากกว่า {1}", items.clone())
                .datetime("{0} ต้องมากกว่าวันที่และเวลาปัจจุบัน"),
        )
        .compound(
            CompoundRule::new("gte")
                .string("{0} ต้องมีความยาวอย่างน้อย {1}", characters)
                .number("{0} ต้องมีค่าอย่างน้อย {1}")
                .items("{0} ต้องประกอบไปด้วยอย่างน้อย {1}", items)
                .datetime("{0} ต้องมากกว่าหรือเท่ากับวันที่และเวลาปัจจุบัน"),
        )
        .simple_all(&["eqfield", "eqcsfield"], "{0} ต้องเท่ากับ {1}")
        .simple_all(&["nefield", "necsfield"], "{0} ต้องไม่เท่ากับ {1}")
        .simple_all(&["gtfield", "gtcsfield"], "{0} ต้องมากกว่า {1}")
        .simple_all(&["gtefield", "gtecsfield"], "{0} ต้องมากกว่าหรือเท่ากับ {1}")
        .simple_all(&["ltfield", "ltcsfield"], "{0} ต้องน้อยกว่า {1}")
        .simple_all(&["ltefield", "ltecsfield"], "{0} ต้องน้อยกว่าหรือเท่ากับ {1}")
        .simple("alpha", "{0} ต้องเป็นตัวอักษรเท่านั้น")
        .simple("alphanum", "{0} ต้องเป็นตัวอักษรหรือตัวเลขเท่านั้น")
        .simple("numeric", "{0} ต้องเป็นค่าตัวเลขที่ถูกต้อง")
        .simple("number", "{0} ต้องเป็นตัวเลขที่ถูกต้อง")
        .simple("hexadecimal", "{0} ต้องเป็นเลขฐานสิบหกที่ถูกต้อง")
        .simple("hexcolor", "{0} ต้องเป็นสี HEX ที่ถูกต้อง")
        .simple("rgb", "{0} ต้องเป็นสี RGB ที่ถูกต้อง")
        .simple("rgba", "{0} ต้องเป็นสี RGBA ที่ถูกต้อง")
        .simple("hsl", "{0} ต้องเป็นสี HSL ที่ถูกต้อง")
        .simple("hsla", "{0} ต้องเป็นสี HSLA ที่ถูกต้อง")
        .simple("e164", "{0} ต้องเป็นหมายเลขโทรศัพท์ในรูปแบบ E.164 ที่ถูกต้อง")
        .simple("email", "{0} ต้องเป็นอีเมลที่ถูกต้อง")
        .simple("url", "{0} ต้องเป็น URL ที่ถูกต้อง")
        .simple("uri", "{0} ต้องเป็น URI ที่ถูกต้อง")
        .simple("base64", "{0} ต้องเป็นข้อความ Base64 ที่ถูกต้อง")
        .simple("contains", "{0} ต้องมีข้อความ '{1}'")
        .simple("containsany", "{0} ต้องมีอักขระอย่างน้อยหนึ่งตัวต่อไปนี้ '{1}'")
        .simple("excludes", "{0} ต้องไม่มีข้อความ '{1}'")
        .simple("excludesall", "{0} ต้องไม่มีอักขระใดๆ ต่อไปนี้ '{1}'")
        .simple("excludesrune", "{0} ต้องไม่มี '{1}'")
        .simple("isbn", "{0} ต้องเป็นหมายเลข ISBN ที่ถูกต้อง")
        .simple("isbn10", "{0} ต้องเป็นหมายเลข ISBN-10 ที่ถูกต้อง")
        .simple("isbn13", "{0} ต้องเป็นหมายเลข ISBN-13 ที่ถูกต้อง")
        .simple("issn", "{0} ต้องเป็นหมายเลข ISSN ที่ถูกต้อง")
        .simple("uuid", "{0} ต้องเป็น UUID ที่ถูกต้อง")
        .simple("uuid3", "{0} ต้องเป็น UUID เวอร์ชัน 3 ที่ถูกต้อง")
        .simple("uuid4", "{0} ต้องเป็น UUID เวอร์ชัน 4 ที่ถูกต้อง")
        .simple("uuid5", "{0} ต้องเป็น UUID เวอร์ชัน 5 ที่ถูกต้อง")
        .simple("ulid", "{0} ต้องเป็น ULID ที่ถูกต้อง")
        .simple("ascii", "{0} ต้องมีเฉพาะอักขระ ascii เท่านั้น")
        .simple("printascii", "{0} ต้องมีเฉพาะอักขระ ascii ที่พิมพ์ได้เท่านั้น")
        .simple("multibyte", "{0} ต้องมีอักขระแบบมัลติไบต์")
        .simple("datauri", "{0} ต้องมี Data URI ที่ถูกต้อง")
        .simple("latitude", "{0} ต้องมีพิกัดละติจูดที่ถูกต้อง")
        .simple("longitude", "{0} ต้องมีพิกัดลองจิจูดที่ถูกต้อง")
        .simple("ssn", "{0} ต้องเป็นหมายเลข SSN ที่ถูกต้อง")
        .simple("ipv4", "{0} ต้องเป็นที่อยู่ IPv4 ที่ถูกต้อง")
        .simple("ipv6", "{0} ต้องเป็นที่อยู่ IPv6 ที่ถูกต้อง")
        .simple("ip", "{0} ต้องเป็นที่อยู่ IP ที่ถูกต้อง")
        .simple("cidr", "{0} ต้องมีรูปแบบ CIDR ที่ถูกต้อง")
        .simple("cidrv4", "{0} ต้องมีรูปแบบ CIDR ที่ถูกต้องสำหรับที่อยู่ IPv4")
        .simple("cidrv6", "{0} ต้องมีรูปแบบ CIDR ที่ถูกต้องสำหรับที่อยู่ IPv6")
        .simple("tcp_addr", "{0} ต้องเป็นที่อยู่ TCP ที่ถูกต้อง")
        .simple("tcp4_addr", "{0} ต้องเป็นที่อยู่ IPv4 TCP ที่ถูกต้อง")
        .simple("tcp6_addr", "{0} ต้องเป็นที่อยู่ IPv6 TCP ที่ถูกต้อง")
        .simple("udp_addr", "{0} ต้องเป็นที่อยู่ UDP ที่ถูกต้อง")
        .simple("udp4_addr", "{0} ต้องเป็นที่อยู่ IPv4 UDP ที่ถูกต้อง")
        .simple("udp6_addr", "{0} ต้องเป็นที่อยู่ IPv6 UDP ที่ถูกต้อง")
        .simple("ip_addr", "{0} ต้องเป็นที่อยู่ IP ที่สามารถค้นหาได้")
        .simple("ip4_addr", "{0} ต้องเป็นที่อยู่ IPv4 ที่สามารถค้นหาได้")
        .simple("ip6_addr", "{0} ต้องเป็นที่อยู่ IPv6 ที่สามารถค้นหาได้")
        .simple("unix_addr", "{0} ต้องเป็นที่อยู่ UNIX ที่สามารถค้นหาได้")
        .simple("mac", "{0} ต้องมีที่อยู่ MAC ที่ถูกต้อง")
        .simple("fqdn", "{0} ต้องเป็นชื่อโดเมนแบบเต็มที่ถูกต้อง")
        .simple("iscolor", "{0} ต้องเป็นสีที่ถูกต้อง")
        .simple("cron", "{0} ต้องเป็นนิพจน์ cron ที่ถูกต้อง")
        .simple("oneof", "{0} ต้องเป็นค่าใดค่าหนึ่งใน [{1}]")
        .simple("json", "{0} ต้องเป็นข้อความ json ที่ถูกต้อง")
        .simple("jwt", "{0} ต้องเป็นข้อความ jwt ที่ถูกต้อง")
        .simple("lowercase", "{0} ต้องเป็นตัวพิมพ์เล็ก")
        .simple("uppercase", "{0} ต้องเป็นตัวพิมพ์ใหญ่")
        .simple("datetime", "{0} ไม่ตรงกับรูปแบบ {1}")
        .simple("boolean", "{0} ต้องเป็นค่าบูลีนที่ถูกต้อง")
        .simple("image", "{0} ต้องเป็นรูปภาพที่ถูกต้อง")
}
