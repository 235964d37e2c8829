//! French messages.
//!
//! French counts 0 and 1 as singular, so `min=0` renders "0 caractère".

use crate::catalog::{Catalog, CompoundRule};
use crate::error::RegistrationError;
use crate::locales::Locale;
use crate::plural::PluralForms;
use crate::translations::Translations;
use crate::translator::Translator;

pub fn translator() -> Translator {
    Locale::Fr.translator()
}

pub fn register_default_translations(
    translations: &mut Translations,
) -> Result<(), RegistrationError> {
    translations.register(&catalog())
}

pub fn catalog() -> Catalog {
    let characters = PluralForms::new("{0} caractère", "{0} caractères");
    let items = PluralForms::new("{0} élément", "{0} éléments");

    Catalog::new(Locale::Fr.code())
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
            "{0} est un champ obligatoire",
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
            "{0} est un champ exclu",
        )
        .simple("isdefault", "{0} doit avoir la valeur par défaut")
        .compound(
            CompoundRule::new("len")
                .string("{0} doit faire une taille de {1}", characters.clone())
                .number("{0} doit être égal à {1}")
                .items("{0} doit contenir {1}", items.clone()),
        )
        .compound(
            CompoundRule::new("min")
                .string("{0} doit faire une taille minimum de {1}", characters.clone())
                .number("{0} doit être égal à {1} ou plus")
                .items("{0} doit contenir au moins {1}", items.clone()),
        )
        .compound(
            CompoundRule::new("max")
                .string("{0} doit faire une taille maximum de {1}", characters.clone())
                .number("{0} doit être égal à {1} ou moins")
                .items("{0} doit contenir au maximum {1}", items.clone()),
        )
        .simple("eq", "{0} n'est pas égal à {1}")
        .simple("ne", "{0} ne doit pas être égal à {1}")
        .compound(
            CompoundRule::new("lt")
                .string("{0} doit avoir une taille inférieure à {1}", characters.clone())
                .number("{0} doit être inférieur à {1}")
                .items("{0} doit contenir moins de {1}", items.clone())
                .datetime("{0} doit être avant la date et l'heure actuelle"),
        )
        .compound(
            CompoundRule::new("lte")
                .string("{0} doit faire une taille maximum de {1}", characters.clone())
                .number("{0} doit faire {1} ou moins")
                .items("{0} doit contenir un maximum de {1}", items.clone())
                .datetime("{0} doit être avant ou pendant la date et l'heure actuelle"),
        )
        .compound(
            CompoundRule::new("gt")
                .string("{0} doit avoir une taille supérieure à {1}", characters.clone())
                .number("{0} doit être supérieur à {1}")
                .items("{0} doit contenir plus de {1}", items.clone())
                .datetime("{0} doit être après la date et l'heure actuelle"),
        )
        .compound(
            CompoundRule::new("gte")
                .string("{0} doit faire une taille d'au moins {1}", characters)
                .number("{0} doit être {1} ou plus")
                .items("{0} doit contenir au moins {1}", items)
                .datetime("{0} doit être après ou pendant la date et l'heure actuelle"),
        )
        .simple_all(&["eqfield", "eqcsfield"], "{0} doit être égal à {1}")
        .simple_all(&["nefield", "necsfield"], "{0} ne doit pas être égal à {1}")
        .simple_all(&["gtfield", "gtcsfield"], "{0} doit être supérieur à {1}")
        .simple_all(
            &["gtefield", "gtecsfield"],
            "{0} doit être supérieur ou égal à {1}",
        )
        .simple_all(&["ltfield", "ltcsfield"], "{0} doit être inférieur à {1}")
        .simple_all(
            &["ltefield", "ltecsfield"],
            "{0} doit être inférieur ou égal à {1}",
        )
        .simple("alpha", "{0} ne doit contenir que des caractères alphabétiques")
        .simple(
            "alphanum",
            "{0} ne doit contenir que des caractères alphanumériques",
        )
        .simple("numeric", "{0} doit être une valeur numérique valide")
        .simple("number", "{0} doit être un nombre valide")
        .simple(
            "hexadecimal",
            "{0} doit être une chaîne de caractères au format hexadécimal valide",
        )
        .simple("hexcolor", "{0} doit être une couleur au format HEX valide")
        .simple("rgb", "{0} doit être une couleur au format RGB valide")
        .simple("rgba", "{0} doit être une couleur au format RGBA valide")
        .simple("hsl", "{0} doit être une couleur au format HSL valide")
        .simple("hsla", "{0} doit être une couleur au format HSLA valide")
        .simple(
            "e164",
            "{0} doit être un numéro de téléphone au format E.164 valide",
        )
        .simple("email", "{0} doit être une adresse email valide")
        .simple("url", "{0} doit être une URL valide")
        .simple("uri", "{0} doit être une URI valide")
        .simple(
            "base64",
            "{0} doit être une chaîne de caractères au format Base64 valide",
        )
        .simple("contains", "{0} doit contenir le texte '{1}'")
        .simple(
            "containsany",
            "{0} doit contenir au moins l'un des caractères suivants '{1}'",
        )
        .simple("excludes", "{0} ne doit pas contenir le texte '{1}'")
        .simple(
            "excludesall",
            "{0} ne doit contenir aucun des caractères suivants '{1}'",
        )
        .simple("excludesrune", "{0} ne doit pas contenir ce qui suit '{1}'")
        .simple("isbn", "{0} doit être un numéro ISBN valide")
        .simple("isbn10", "{0} doit être un numéro ISBN-10 valide")
        .simple("isbn13", "{0} doit être un numéro ISBN-13 valide")
        .simple("issn", "{0} doit être un numéro ISSN valide")
        .simple("uuid", "{0} doit être un UUID valide")
        .simple("uuid3", "{0} doit être un UUID version 3 valide")
        .simple("uuid4", "{0} doit être un UUID version 4 valide")
        .simple("uuid5", "{0} doit être un UUID version 5 valide")
        .simple("ascii", "{0} ne doit contenir que des caractères ascii")
        .simple(
            "printascii",
            "{0} ne doit contenir que des caractères ascii affichables",
        )
        .simple("multibyte", "{0} doit contenir des caractères multioctets")
        .simple("datauri", "{0} doit contenir une Data URI valide")
        .simple("latitude", "{0} doit contenir des coordonnées latitude valides")
        .simple(
            "longitude",
            "{0} doit contenir des coordonnées longitude valides",
        )
        .simple("ssn", "{0} doit être un numéro SSN valide")
        .simple("ipv4", "{0} doit être une adresse IPv4 valide")
        .simple("ipv6", "{0} doit être une adresse IPv6 valide")
        .simple("ip", "{0} doit être une adresse IP valide")
        .simple("cidr", "{0} doit contenir une notation CIDR valide")
        .simple(
            "cidrv4",
            "{0} doit contenir une notation CIDR valide pour une adresse IPv4",
        )
        .simple(
            "cidrv6",
            "{0} doit contenir une notation CIDR valide pour une adresse IPv6",
        )
        .simple("tcp_addr", "{0} doit être une adresse TCP valide")
        .simple("tcp4_addr", "{0} doit être une adresse IPv4 TCP valide")
        .simple("tcp6_addr", "{0} doit être une adresse IPv6 TCP valide")
        .simple("udp_addr", "{0} doit être une adresse UDP valide")
        .simple("udp4_addr", "{0} doit être une adresse IPv4 UDP valide")
        .simple("udp6_addr", "{0} doit être une adresse IPv6 UDP valide")
        .simple("ip_addr", "{0} doit être une adresse IP résolvable")
        .simple("ip4_addr", "{0} doit être une adresse IPv4 résolvable")
        .simple("ip6_addr", "{0} doit être une adresse IPv6 résolvable")
        .simple("unix_addr", "{0} doit être une adresse UNIX résolvable")
        .simple("mac", "{0} doit contenir une adresse MAC valide")
        .simple("unique", "{0} doit contenir des valeurs uniques")
        .simple("iscolor", "{0} doit être une couleur valide")
        .simple("oneof", "{0} doit être l'un des choix suivants [{1}]")
        .simple("lowercase", "{0} doit être une chaîne en minuscules")
        .simple("uppercase", "{0} doit être une chaîne en majuscules")
        .simple("datetime", "{0} ne correspond pas au format {1}")
        .simple("boolean", "{0} doit être une valeur booléenne valide")
}
