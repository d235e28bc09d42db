//! Per-locale accessor class emission.
//!
//! The reference locale becomes the base class `S` with members sorted
//! alphabetically inside each group (plain, parametrized, plurals). Every
//! other locale becomes a subclass of `S` emitted in key declaration order
//! with `@override` markers and a text-direction override.

use indexmap::IndexMap;

use super::classify::ClassifiedKeySet;
use super::params::extract_parameters;
use super::plurals::{PluralFamily, Quantity};
use super::templates::REFERENCE_CLASS_HEADER;
use crate::arb::REFERENCE_LOCALE;

/// Base language codes written right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar", "dv", "fa", "ha", "he", "iw", "ji", "ps", "ur", "yi"];

/// Dispatch parameter name used when the `other` value has no placeholder.
const FALLBACK_PLURAL_PARAMETER: &str = "param";

/// Generated class name for a locale code.
pub fn class_name(locale: &str) -> String {
    format!("${}", locale)
}

/// Whether a locale renders right-to-left, judged by its base language code.
pub fn is_rtl(locale: &str) -> bool {
    let base = locale.split('_').next().unwrap_or(locale);
    RTL_LANGUAGES.contains(&base)
}

/// Emit the reference class `S` with all members of the reference bundle.
pub fn emit_reference_class(
    classified: &ClassifiedKeySet,
    values: &IndexMap<String, String>,
    out: &mut String,
) {
    out.push_str(REFERENCE_CLASS_HEADER);

    let mut plain = classified.plain.clone();
    plain.sort();
    for id in &plain {
        if let Some(value) = values.get(id) {
            emit_string_getter(id, value, false, out);
        }
    }

    let mut parametrized = classified.parametrized.clone();
    parametrized.sort();
    for id in &parametrized {
        if let Some(value) = values.get(id) {
            emit_parametrized_method(id, value, false, out);
        }
    }

    let mut plurals: Vec<&PluralFamily> = classified.plurals.iter().collect();
    plurals.sort_by(|a, b| a.base_id.cmp(&b.base_id));
    for family in plurals {
        emit_plural_method(family, false, out);
    }

    out.push_str("}\n\n");
}

/// Emit the empty reference-locale subclass at its provider position.
pub fn emit_reference_stub(out: &mut String) {
    let name = class_name(REFERENCE_LOCALE);
    out.push_str(&format!(
        "class {name} extends S {{\n  const {name}();\n}}\n\n"
    ));
}

/// Emit one locale's subclass, members in declaration order with `@override`.
///
/// Locales with the legacy `iw` language code additionally emit a `$he_IL`
/// subclass so the modern code resolves to the same strings.
pub fn emit_locale_class(
    locale: &str,
    classified: &ClassifiedKeySet,
    values: &IndexMap<String, String>,
    out: &mut String,
) {
    let name = class_name(locale);
    let direction = if is_rtl(locale) { "rtl" } else { "ltr" };
    out.push_str(&format!(
        "class {name} extends S {{\n  const {name}();\n\n  @override\n  TextDirection get textDirection => TextDirection.{direction};\n\n"
    ));

    for id in &classified.plain {
        if let Some(value) = values.get(id) {
            emit_string_getter(id, value, true, out);
        }
    }
    for id in &classified.parametrized {
        if let Some(value) = values.get(id) {
            emit_parametrized_method(id, value, true, out);
        }
    }
    for family in &classified.plurals {
        emit_plural_method(family, true, out);
    }

    out.push_str("}\n\n");

    if locale.starts_with("iw") {
        out.push_str(&format!(
            "class $he_IL extends {name} {{\n  const $he_IL();\n\n  @override\n  TextDirection get textDirection => TextDirection.rtl;\n}}\n\n"
        ));
    }
}

fn emit_string_getter(id: &str, value: &str, is_override: bool, out: &mut String) {
    if is_override {
        out.push_str("  @override\n");
    }
    out.push_str(&format!("  String get {id} => \"{value}\";\n"));
}

/// A parametrized method takes one `String` argument per distinct placeholder
/// and re-embeds the literal value, which Dart interpolates against the
/// method's parameters.
fn emit_parametrized_method(id: &str, value: &str, is_override: bool, out: &mut String) {
    if is_override {
        out.push_str("  @override\n");
    }

    let parameters = extract_parameters(value);
    if parameters.is_empty() {
        out.push_str(&format!("  String get {id}"));
    } else {
        let signature = parameters
            .iter()
            .map(|p| format!("String {p}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("  String {id}({signature})"));
    }
    out.push_str(&format!(" => \"{value}\";\n"));
}

/// A plural method dispatches over the textual form of its argument: literal
/// cases for the present quantities, `default` returning the mandatory
/// `other` value. The parameter is named after the first placeholder of the
/// `other` value when there is one.
fn emit_plural_method(family: &PluralFamily, is_override: bool, out: &mut String) {
    let other_value = family.other_value();
    let parameter = extract_parameters(other_value)
        .into_iter()
        .next()
        .unwrap_or_else(|| FALLBACK_PLURAL_PARAMETER.to_string());

    if is_override {
        out.push_str("  @override\n");
    }

    let id = family.accessor_id();
    out.push_str(&format!(
        "  String {id}(dynamic {parameter}) {{\n    switch ({parameter}.toString()) {{\n"
    ));

    for quantity in Quantity::ALL {
        let Some(literal) = quantity.count_literal() else {
            continue;
        };
        if let Some(value) = family.cases.get(&quantity) {
            out.push_str(&format!(
                "      case \"{literal}\":\n        return \"{value}\";\n"
            ));
        }
    }

    out.push_str(&format!(
        "      default:\n        return \"{other_value}\";\n    }}\n  }}\n"
    ));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::classify::classify;
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_is_rtl() {
        assert!(is_rtl("ar_EG"));
        assert!(is_rtl("he"));
        assert!(is_rtl("iw_IL"));
        assert!(!is_rtl("en_US"));
        assert!(!is_rtl("fr"));
    }

    #[test]
    fn test_reference_class_members_are_sorted_without_override() {
        let values = entries(&[
            ("zebra", "Zebra"),
            ("apple", "Apple"),
            ("greeting", "Hi $name"),
        ]);
        let classified = classify(&values);

        let mut out = String::new();
        emit_reference_class(&classified, &values, &mut out);

        let expected = format!(
            "{}{}",
            REFERENCE_CLASS_HEADER,
            "  String get apple => \"Apple\";\n\
             \x20 String get zebra => \"Zebra\";\n\
             \x20 String greeting(String name) => \"Hi $name\";\n\
             }\n\n"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_locale_class_keeps_declaration_order_with_override() {
        let values = entries(&[("zebra", "Zèbre"), ("apple", "Pomme")]);
        let classified = classify(&values);

        let mut out = String::new();
        emit_locale_class("fr", &classified, &values, &mut out);

        let expected = "class $fr extends S {\n\
                        \x20 const $fr();\n\n\
                        \x20 @override\n\
                        \x20 TextDirection get textDirection => TextDirection.ltr;\n\n\
                        \x20 @override\n\
                        \x20 String get zebra => \"Zèbre\";\n\
                        \x20 @override\n\
                        \x20 String get apple => \"Pomme\";\n\
                        }\n\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_rtl_locale_class_direction() {
        let values = entries(&[]);
        let classified = classify(&values);

        let mut out = String::new();
        emit_locale_class("ar_EG", &classified, &values, &mut out);

        assert!(out.contains("TextDirection get textDirection => TextDirection.rtl;"));
    }

    #[test]
    fn test_iw_locale_emits_he_il_subclass() {
        let values = entries(&[]);
        let classified = classify(&values);

        let mut out = String::new();
        emit_locale_class("iw", &classified, &values, &mut out);

        assert!(out.contains("class $iw extends S {"));
        assert!(out.contains("class $he_IL extends $iw {"));
        // the derived class forces rtl
        assert_eq!(out.matches("TextDirection.rtl").count(), 2);
    }

    #[test]
    fn test_plural_method_cases_and_default() {
        let values = entries(&[
            ("itemsZero", "no items"),
            ("itemsOne", "1 item"),
            ("itemsOther", "$count items"),
        ]);
        let classified = classify(&values);

        let mut out = String::new();
        emit_plural_method(&classified.plurals[0], false, &mut out);

        let expected = "  String items(dynamic count) {\n\
                        \x20   switch (count.toString()) {\n\
                        \x20     case \"0\":\n\
                        \x20       return \"no items\";\n\
                        \x20     case \"1\":\n\
                        \x20       return \"1 item\";\n\
                        \x20     default:\n\
                        \x20       return \"$count items\";\n\
                        \x20   }\n\
                        \x20 }\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_plural_parameter_falls_back_when_other_has_no_placeholder() {
        let values = entries(&[("cartOther", "many things")]);
        let classified = classify(&values);

        let mut out = String::new();
        emit_plural_method(&classified.plurals[0], false, &mut out);

        assert!(out.starts_with("  String cart(dynamic param) {"));
    }

    #[test]
    fn test_plural_accessor_drops_trailing_underscore() {
        let values = entries(&[("items_other", "$n items")]);
        let classified = classify(&values);

        let mut out = String::new();
        emit_plural_method(&classified.plurals[0], false, &mut out);

        assert!(out.starts_with("  String items(dynamic n) {"));
    }

    #[test]
    fn test_parametrized_method_collapses_duplicate_placeholders() {
        let mut out = String::new();
        emit_parametrized_method("bye", "Bye $name, see you $name", false, &mut out);

        assert_eq!(
            out,
            "  String bye(String name) => \"Bye $name, see you $name\";\n"
        );
    }

    #[test]
    fn test_reference_stub() {
        let mut out = String::new();
        emit_reference_stub(&mut out);
        assert_eq!(out, "class $en extends S {\n  const $en();\n}\n\n");
    }
}
