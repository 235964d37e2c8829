//! English messages.

use crate::catalog::{Catalog, CompoundRule};
use crate::error::RegistrationError;
use crate::locales::Locale;
use crate::plural::PluralForms;
use crate::translations::Translations;
use crate::translator::Translator;

pub fn translator() -> Translator {
    Locale::En.translator()
}

pub fn register_default_translations(
    translations: &mut Translations,
) -> Result<(), RegistrationError> {
    translations.register(&catalog())
}

pub fn catalog() -> Catalog {
    let characters = PluralForms::new("{0} character", "{0} characters");
    let items = PluralForms::new("{0} item", "{0} items");

    Catalog::new(Locale::En.code())
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
            "{0} is a required field",
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
            "{0} is an excluded field",
        )
        .simple("isdefault", "{0} must be default value")
        .compound(
            CompoundRule::new("len")
                .string("{0} must be {1} in length", characters.clone())
                .number("{0} must be equal to {1}")
                .items("{0} must contain {1}", items.clone()),
        )
        .compound(
            CompoundRule::new("min")
                .string("{0} must be at least {1} in length", characters.clone())
                .number("{0} must be {1} or greater")
                .items("{0} must contain at least {1}", items.clone()),
        )
        .compound(
            CompoundRule::new("max")
                .string("{0} must be a maximum of {1} in length", characters.clone())
                .number("{0} must be {1} or less")
                .items("{0} must contain at maximum {1}", items.clone()),
        )
        .simple("eq", "{0} is not equal to {1}")
        .simple("ne", "{0} should not be equal to {1}")
        .compound(
            CompoundRule::new("lt")
                .string("{0} must be less than {1} in length", characters.clone())
                .number("{0} must be less than {1}")
                .items("{0} must contain less than {1}", items.clone())
                .datetime("{0} must be less than the current Date & Time"),
        )
        .compound(
            CompoundRule::new("lte")
                .string("{0} must be at maximum {1} in length", characters.clone())
                .number("{0} must be {1} or less")
                .items("{0} must contain at maximum {1}", items.clone())
                .datetime("{0} must be less than or equal to the current Date & Time"),
        )
        .compound(
            CompoundRule::new("gt")
                .string("{0} must be greater than {1} in length", characters.clone())
                .number("{0} must be greater than {1}")
                .items("{0} must contain more than {1}", items.clone())
                .datetime("{0} must be greater than the current Date & Time"),
        )
        .compound(
            CompoundRule::new("gte")
                .string("{0} must be at least {1} in length", characters)
                .number("{0} must be {1} or greater")
                .items("{0} must contain at least {1}", items)
                .datetime("{0} must be greater than or equal to the current Date & Time"),
        )
        .simple_all(&["eqfield", "eqcsfield"], "{0} must be equal to {1}")
        .simple_all(&["nefield", "necsfield"], "{0} cannot be equal to {1}")
        .simple_all(&["gtfield", "gtcsfield"], "{0} must be greater than {1}")
        .simple_all(
            &["gtefield", "gtecsfield"],
            "{0} must be greater than or equal to {1}",
        )
        .simple_all(&["ltfield", "ltcsfield"], "{0} must be less than {1}")
        .simple_all(
            &["ltefield", "ltecsfield"],
            "{0} must be less than or equal to {1}",
        )
        .simple("alpha", "{0} can only contain alphabetic characters")
        .simple("alphanum", "{0} can only contain alphanumeric characters")
        .simple("numeric", "{0} must be a valid numeric value")
        .simple("number", "{0} must be a valid number")
        .simple("hexadecimal", "{0} must be a valid hexadecimal")
        .simple("hexcolor", "{0} must be a valid HEX color")
        .simple("rgb", "{0} must be a valid RGB color")
        .simple("rgba", "{0} must be a valid RGBA color")
        .simple("hsl", "{0} must be a valid HSL color")
        .simple("hsla", "{0} must be a valid HSLA color")
        .simple("e164", "{0} must be a valid E.164 formatted phone number")
        .simple("email", "{0} must be a valid email address")
        .simple("url", "{0} must be a valid URL")
        .simple("uri", "{0} must be a valid URI")
        .simple("base64", "{0} must be a valid Base64 string")
        .simple("contains", "{0} must contain the text '{1}'")
        .simple(
            "containsany",
            "{0} must contain at least one of the following characters '{1}'",
        )
        .simple("excludes", "{0} cannot contain the text '{1}'")
        .simple(
            "excludesall",
            "{0} cannot contain any of the following characters '{1}'",
        )
        .simple("excludesrune", "{0} cannot contain the following '{1}'")
        .simple("isbn", "{0} must be a valid ISBN number")
        .simple("isbn10", "{0} must be a valid ISBN-10 number")
        .simple("isbn13", "{0} must be a valid ISBN-13 number")
        .simple("issn", "{0} must be a valid ISSN number")
        .simple("uuid", "{0} must be a valid UUID")
        .simple("uuid3", "{0} must be a valid version 3 UUID")
        .simple("uuid4", "{0} must be a valid version 4 UUID")
        .simple("uuid5", "{0} must be a valid version 5 UUID")
        .simple("ulid", "{0} must be a valid ULID")
        .simple("ascii", "{0} must contain only ascii characters")
        .simple("printascii", "{0} must contain only printable ascii characters")
        .simple("multibyte", "{0} must contain multibyte characters")
        .simple("datauri", "{0} must contain a valid Data URI")
        .simple("latitude", "{0} must contain valid latitude coordinates")
        .simple("longitude", "{0} must contain valid longitude coordinates")
        .simple("ssn", "{0} must be a valid SSN number")
        .simple("ipv4", "{0} must be a valid IPv4 address")
        .simple("ipv6", "{0} must be a valid IPv6 address")
        .simple("ip", "{0} must be a valid IP address")
        .simple("cidr", "{0} must contain a valid CIDR notation")
        .simple(
            "cidrv4",
            "{0} must contain a valid CIDR notation for an IPv4 address",
        )
        .simple(
            "cidrv6",
            "{0} must contain a valid CIDR notation for an IPv6 address",
        )
        .simple("tcp_addr", "{0} must be a valid TCP address")
        .simple("tcp4_addr", "{0} must be a valid IPv4 TCP address")
        .simple("tcp6_addr", "{0} must be a valid IPv6 TCP address")
        .simple("udp_addr", "{0} must be a valid UDP address")
        .simple("udp4_addr", "{0} must be a valid IPv4 UDP address")
        .simple("udp6_addr", "{0} must be a valid IPv6 UDP address")
        .simple("ip_addr", "{0} must be a resolvable IP address")
        .simple("ip4_addr", "{0} must be a resolvable IPv4 address")
        .simple("ip6_addr", "{0} must be a resolvable IPv6 address")
        .simple("unix_addr", "{0} must be a resolvable UNIX address")
        .simple("mac", "{0} must contain a valid MAC address")
        .simple("fqdn", "{0} must be a valid FQDN")
        .simple("unique", "{0} must contain unique values")
        .simple("iscolor", "{0} must be a valid color")
        .simple("cron", "{0} must be a valid cron expression")
        .simple("oneof", "{0} must be one of [{1}]")
        .simple("json", "{0} must be a valid json string")
        .simple("jwt", "{0} must be a valid jwt string")
        .simple("lowercase", "{0} must be a lowercase string")
        .simple("uppercase", "{0} must be an uppercase string")
        .simple("datetime", "{0} does not match the {1} format")
        .simple(
            "postcode_iso3166_alpha2",
            "{0} does not match postcode format of {1} country",
        )
        .simple(
            "postcode_iso3166_alpha2_field",
            "{0} does not match postcode format of country in {1} field",
        )
        .simple("boolean", "{0} must be a valid boolean value")
        .simple("image", "{0} must be a valid image")
        .simple("cve", "{0} must be a valid cve identifier")
}
