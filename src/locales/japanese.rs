//! Japanese messages.
//!
//! Counters do not change with the quantity: only `other` forms exist.

use crate::catalog::{Catalog, CompoundRule};
use crate::error::RegistrationError;
use crate::locales::Locale;
use crate::plural::PluralForms;
use crate::translations::Translations;
use crate::translator::Translator;

pub fn translator() -> Translator {
    Locale::Ja.translator()
}

pub fn register_default_translations(
    translations: &mut Translations,
) -> Result<(), RegistrationError> {
    translations.register(&catalog())
}

pub fn catalog() -> Catalog {
    let characters = PluralForms::other("{0}文字");
    let items = PluralForms::other("{0}つの項目");

    Catalog::new(Locale::Ja.code())
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
            "{0}は必須フィールドです",
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
            "{0}は除外されたフィールドです",
        )
        .simple("isdefault", "{0}はデフォルト値でなければなりません")
        .compound(
            CompoundRule::new("len")
                .string("{0}の長さは{1}でなければなりません", characters.clone())
                .number("{0}は{1}と等しくなければなりません")
                .items("{0}は{1}を含まなければなりません", items.clone()),
        )
        .compound(
            CompoundRule::new("min")
                .string("{0}の長さは少なくとも{1}でなければなりません", characters.clone())
                .number("{0}は{1}以上でなければなりません")
                .items("{0}は少なくとも{1}を含まなければなりません", items.clone()),
        )
        .compound(
            CompoundRule::new("max")
                .string("{0}の長さは最大で{1}でなければなりません", characters.clone())
                .number("{0}は{1}以下でなければなりません")
                .items("{0}は最大で{1}を含まなければなりません", items.clone()),
        )
        .simple("eq", "{0}は{1}と等しくありません")
        .simple("ne", "{0}は{1}と異ならなければなりません")
        .compound(
            CompoundRule::new("lt")
                .string("{0}の長さは{1}よりも少なくなければなりません", characters.clone())
                .number("{0}は{1}よりも小さくなければなりません")
                .items("{0}は{1}よりも少ない項目を含まなければなりません", items.clone())
                .datetime("{0}は現時刻よりも前でなければなりません"),
        )
        .compound(
            CompoundRule::new("lte")
                .string("{0}の長さは最大で{1}でなければなりません", characters.clone())
                .number("{0}は{1}以下でなければなりません")
                .items("{0}は最大で{1}を含まなければなりません", items.clone())
                .datetime("{0}は現時刻以前でなければなりません"),
        )
        .compound(
            CompoundRule::new("gt")
                .string("{0}の長さは{1}よりも多くなければなりません", characters.clone())
                .number("{0}は{1}よりも大きくなければなりません")
                .items("{0}は{1}よりも多い項目を含まなければなりません", items.clone())
                .datetime("{0}は現時刻よりも後でなければなりません"),
        )
        .compound(
            CompoundRule::new("gte")
                .string("{0}の長さは少なくとも{1}以上でなければなりません", characters)
                .number("{0}は{1}以上でなければなりません")
                .items("{0}は少なくとも{1}を含まなければなりません", items)
                .datetime("{0}は現時刻以降でなければなりません"),
        )
        .simple_all(&["eqfield", "eqcsfield"], "{0}は{1}と等しくなければなりません")
        .simple_all(&["nefield", "necsfield"], "{0}は{1}とは異ならなければなりません")
        .simple_all(&["gtfield", "gtcsfield"], "{0}は{1}よりも大きくなければなりません")
        .simple_all(&["gtefield", "gtecsfield"], "{0}は{1}以上でなければなりません")
        .simple_all(&["ltfield", "ltcsfield"], "{0}は{1}よりも小さくなければなりません")
        .simple_all(&["ltefield", "ltecsfield"], "{0}は{1}以下でなければなりません")
        .simple("alpha", "{0}はアルファベットのみを含むことができます")
        .simple("alphanum", "{0}はアルファベットと数字のみを含むことができます")
        .simple("numeric", "{0}は正しい数字でなければなりません")
        .simple("number", "{0}は正しい数でなければなりません")
        .simple("hexadecimal", "{0}は正しい16進表記でなければなりません")
        .simple("hexcolor", "{0}は正しいHEXカラーコードでなければなりません")
        .simple("rgb", "{0}は正しいRGBカラーコードでなければなりません")
        .simple("rgba", "{0}は正しいRGBAカラーコードでなければなりません")
        .simple("hsl", "{0}は正しいHSLカラーコードでなければなりません")
        .simple("hsla", "{0}は正しいHSLAカラーコードでなければなりません")
        .simple("e164", "{0}は正しいE.164形式の電話番号でなければなりません")
        .simple("email", "{0}は正しいメールアドレスでなければなりません")
        .simple("url", "{0}は正しいURLでなければなりません")
        .simple("uri", "{0}は正しいURIでなければなりません")
        .simple("base64", "{0}は正しいBase64文字列でなければなりません")
        .simple("contains", "{0}は'{1}'を含まなければなりません")
        .simple("containsany", "{0}は'{1}'の少なくとも1つを含まなければなりません")
        .simple("excludes", "{0}には'{1}'というテキストを含むことはできません")
        .simple("excludesall", "{0}には'{1}'のどれも含めることはできません")
        .simple("excludesrune", "{0}には'{1}'を含めることはできません")
        .simple("isbn", "{0}は正しいISBN番号でなければなりません")
        .simple("isbn10", "{0}は正しいISBN-10番号でなければなりません")
        .simple("isbn13", "{0}は正しいISBN-13番号でなければなりません")
        .simple("issn", "{0}は正しいISSN番号でなければなりません")
        .simple("uuid", "{0}は正しいUUIDでなければなりません")
        .simple("uuid3", "{0}はバージョンが3の正しいUUIDでなければなりません")
        .simple("uuid4", "{0}はバージョンが4の正しいUUIDでなければなりません")
        .simple("uuid5", "{0}はバージョンが5の正しいUUIDでなければなりません")
        .simple("ulid", "{0}は正しいULIDでなければなりません")
        .simple("ascii", "{0}はASCII文字のみを含まなければなりません")
        .simple("printascii", "{0}は印刷可能なASCII文字のみを含まなければなりません")
        .simple("multibyte", "{0}はマルチバイト文字を含まなければなりません")
        .simple("datauri", "{0}は正しいデータURIを含まなければなりません")
        .simple("latitude", "{0}は正しい緯度の座標を含まなければなりません")
        .simple("longitude", "{0}は正しい経度の座標を含まなければなりません")
        .simple("ssn", "{0}は正しい社会保障番号でなければなりません")
        .simple("ipv4", "{0}は正しいIPv4アドレスでなければなりません")
        .simple("ipv6", "{0}は正しいIPv6アドレスでなければなりません")
        .simple("ip", "{0}は正しいIPアドレスでなければなりません")
        .simple("cidr", "{0}は正しいCIDR表記を含まなければなりません")
        .simple("cidrv4", "{0}はIPv4アドレスの正しいCIDR表記を含まなければなりません")
        .simple("cidrv6", "{0}はIPv6アドレスの正しいCIDR表記を含まなければなりません")
        .simple("tcp_addr", "{0}は正しいTCPアドレスでなければなりません")
        .simple("tcp4_addr", "{0}は正しいIPv4のTCPアドレスでなければなりません")
        .simple("tcp6_addr", "{0}は正しいIPv6のTCPアドレスでなければなりません")
        .simple("udp_addr", "{0}は正しいUDPアドレスでなければなりません")
        .simple("udp4_addr", "{0}は正しいIPv4のUDPアドレスでなければなりません")
        .simple("udp6_addr", "{0}は正しいIPv6のUDPアドレスでなければなりません")
        .simple("ip_addr", "{0}は解決可能なIPアドレスでなければなりません")
        .simple("ip4_addr", "{0}は解決可能なIPv4アドレスでなければなりません")
        .simple("ip6_addr", "{0}は解決可能なIPv6アドレスでなければなりません")
        .simple("unix_addr", "{0}は解決可能なUNIXアドレスでなければなりません")
        .simple("mac", "{0}は正しいMACアドレスを含まなければなりません")
        .simple("fqdn", "{0}は正しい完全修飾ドメイン名でなければなりません")
        .simple("unique", "{0}は一意な値のみを含まなければなりません")
        .simple("iscolor", "{0}は正しい色でなければなりません")
        .simple("oneof", "{0}は[{1}]のうちのいずれかでなければなりません")
        .simple("json", "{0}は正しいJSON文字列でなければなりません")
        .simple("lowercase", "{0}は小文字でなければなりません")
        .simple("uppercase", "{0}は大文字でなければなりません")
        .simple("datetime", "{0}は{1}の書式と一致しません")
        .simple("boolean", "{0}は正しいブール値でなければなりません")
}
