//! Dutch messages.
//!
//! Numbers are rendered with English separators (`1,113.00`).

use crate::catalog::{Catalog, CompoundRule};
use crate::error::RegistrationError;
use crate::locales::Locale;
use crate::plural::PluralForms;
use crate::translations::Translations;
use crate::translator::Translator;

pub fn translator() -> Translator {
    Locale::Nl.translator()
}

pub fn register_default_translations(
    translations: &mut Translations,
) -> Result<(), RegistrationError> {
    translations.register(&catalog())
}

pub fn catalog() -> Catalog {
    let characters = PluralForms::new("{0} karakter", "{0} karakters");
    let items = PluralForms::new("{0} item", "{0} items");

    Catalog::new(Locale::Nl.code())
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
            "{0} is een verplicht veld",
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
            "{0} is een uitgesloten veld",
        )
        .compound(
            CompoundRule::new("len")
                .string("{0} moet {1} lang zijn", characters.clone())
                .number("{0} moet gelijk zijn aan {1}")
                .items("{0} moet {1} bevatten", items.clone()),
        )
        .compound(
            CompoundRule::new("min")
                .string("{0} moet tenminste {1} lang zijn", characters.clone())
                .number("{0} moet {1} of groter zijn")
                .items("{0} moet tenminste {1} bevatten", items.clone()),
        )
        .compound(
            CompoundRule::new("max")
                .string("{0} mag maximaal {1} lang zijn", characters.clone())
                .number("{0} moet {1} of kleiner zijn")
                .items("{0} mag maximaal {1} bevatten", items.clone()),
        )
        .simple("eq", "{0} is niet gelijk aan {1}")
        .simple("ne", "{0} mag niet gelijk zijn aan {1}")
        .compound(
            CompoundRule::new("lt")
                .string("{0} moet minder dan {1} lang zijn", characters.clone())
                .number("{0} moet kleiner zijn dan {1}")
                .items("{0} moet minder dan {1} bevatten", items.clone())
                .datetime("{0} moet kleiner zijn dan de huidige datum & tijd"),
        )
        .compound(
            CompoundRule::new("lte")
                .string("{0} mag maximaal {1} lang zijn", characters.clone())
                .number("{0} moet {1} of minder zijn")
                .items("{0} mag maximaal {1} bevatten", items.clone())
                .datetime("{0} moet kleiner dan of gelijk aan de huidige datum & tijd zijn"),
        )
        .compound(
            CompoundRule::new("gt")
                .string("{0} moet langer dan {1} zijn", characters.clone())
                .number("{0} moet groter zijn dan {1}")
                .items("{0} moet meer dan {1} bevatten", items.clone())
                .datetime("{0} moet groter zijn dan de huidige datum & tijd"),
        )
        .compound(
            CompoundRule::new("gte")
                .string("{0} moet tenminste {1} lang zijn", characters)
                .number("{0} moet {1} of groter zijn")
                .items("{0} moet tenminste {1} bevatten", items)
                .datetime("{0} moet groter dan of gelijk zijn aan de huidige datum & tijd"),
        )
        .simple_all(&["eqfield", "eqcsfield"], "{0} moet gelijk zijn aan {1}")
        .simple_all(&["nefield", "necsfield"], "{0} kan niet gelijk zijn aan {1}")
        .simple_all(&["gtfield", "gtcsfield"], "{0} moet groter zijn dan {1}")
        .simple_all(
            &["gtefield", "gtecsfield"],
            "{0} moet groter dan of gelijk aan {1} zijn",
        )
        .simple_all(&["ltfield", "ltcsfield"], "{0} moet kleiner zijn dan {1}")
        .simple_all(
            &["ltefield", "ltecsfield"],
            "{0} moet kleiner dan of gelijk aan {1} zijn",
        )
        .simple("alpha", "{0} mag alleen alfabetische karakters bevatten")
        .simple("alphanum", "{0} mag alleen alfanumerieke karakters bevatten")
        .simple("numeric", "{0} moet een geldige numerieke waarde zijn")
        .simple("number", "{0} moet een geldig getal zijn")
        .simple("hexadecimal", "{0} moet een geldig hexadecimaal getal zijn")
        .simple("hexcolor", "{0} moet een geldige HEX kleur zijn")
        .simple("rgb", "{0} moet een geldige RGB kleur zijn")
        .simple("rgba", "{0} moet een geldige RGBA kleur zijn")
        .simple("hsl", "{0} moet een geldige HSL kleur zijn")
        .simple("hsla", "{0} moet een geldige HSLA kleur zijn")
        .simple("email", "{0} moet een geldig email adres zijn")
        .simple("url", "{0} moet een geldige URL zijn")
        .simple("uri", "{0} moet een geldige URI zijn")
        .simple("base64", "{0} moet een geldige Base64 string zijn")
        .simple("contains", "{0} moet de tekst '{1}' bevatten")
        .simple(
            "containsany",
            "{0} moet tenminste een van de volgende karakters bevatten '{1}'",
        )
        .simple("excludes", "{0} mag niet de tekst '{1}' bevatten")
        .simple(
            "excludesall",
            "{0} mag niet een van de volgende karakters bevatten '{1}'",
        )
        .simple("excludesrune", "{0} mag niet het volgende bevatten '{1}'")
        .simple("isbn", "{0} moet een geldig ISBN nummer zijn")
        .simple("isbn10", "{0} moet een geldig ISBN-10 nummer zijn")
        .simple("isbn13", "{0} moet een geldig ISBN-13 nummer zijn")
        .simple("uuid", "{0} moet een geldige UUID zijn")
        .simple("uuid3", "{0} moet een geldige versie 3 UUID zijn")
        .simple("uuid4", "{0} moet een geldige versie 4 UUID zijn")
        .simple("uuid5", "{0} moet een geldige versie 5 UUID zijn")
        .simple("ascii", "{0} mag alleen ascii karakters bevatten")
        .simple("printascii", "{0} mag alleen afdrukbare ascii karakters bevatten")
        .simple("multibyte", "{0} moet multibyte karakters bevatten")
        .simple("datauri", "{0} moet een geldige Data URI bevatten")
        .simple("latitude", "{0} moet geldige breedtegraadcoördinaten bevatten")
        .simple("longitude", "{0} moet geldige lengtegraadcoördinaten bevatten")
        .simple("ssn", "{0} moet een geldig SSN nummer zijn")
        .simple("ipv4", "{0} moet een geldig IPv4 adres zijn")
        .simple("ipv6", "{0} moet een geldig IPv6 adres zijn")
        .simple("ip", "{0} moet een geldig IP adres zijn")
        .simple("cidr", "{0} moet een geldige CIDR notatie bevatten")
        .simple(
            "cidrv4",
            "{0} moet een geldige CIDR notatie voor een IPv4 adres bevatten",
        )
        .simple(
            "cidrv6",
            "{0} moet een geldige CIDR notatie voor een IPv6 adres bevatten",
        )
        .simple("tcp_addr", "{0} moet een geldig TCP adres zijn")
        .simple("tcp4_addr", "{0} moet een geldig IPv4 TCP adres zijn")
        .simple("tcp6_addr", "{0} moet een geldig IPv6 TCP adres zijn")
        .simple("udp_addr", "{0} moet een geldig UDP adres zijn")
        .simple("udp4_addr", "{0} moet een geldig IPv4 UDP adres zijn")
        .simple("udp6_addr", "{0} moet een geldig IPv6 UDP adres zijn")
        .simple("ip_addr", "{0} moet een oplosbaar IP adres zijn")
        .simple("ip4_addr", "{0} moet een oplosbaar IPv4 adres zijn")
        .simple("ip6_addr", "{0} moet een oplosbaar IPv6 adres zijn")
        .simple("unix_addr", "{0} moet een oplosbaar UNIX adres zijn")
        .simple("mac", "{0} moet een geldig MAC adres bevatten")
        .simple("unique", "{0} moet unieke waarden bevatten")
        .simple("iscolor", "{0} moet een geldige kleur zijn")
        .simple("oneof", "{0} moet een van de volgende zijn [{1}]")
}
