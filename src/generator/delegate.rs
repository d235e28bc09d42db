//! Delegate class emission.
//!
//! The delegate enumerates the supported locales, resolves a requested locale
//! against them (exact language+region first, then language only, then the
//! fallback) and loads the matching generated class instance. The legacy `iw`
//! language code is advertised and routed as the modern `he_IL`.

use super::templates::{DELEGATE_FOOTER, DELEGATE_HEADER, DELEGATE_RESOLUTION};
use crate::generator::locale_class::class_name;

/// Language and region parts of a locale code, split on the first `_`.
pub fn split_locale(locale: &str) -> (&str, &str) {
    locale.split_once('_').unwrap_or((locale, ""))
}

pub fn emit_delegate(locales: &[String], out: &mut String) {
    out.push_str(DELEGATE_HEADER);

    for locale in locales {
        if locale.starts_with("iw") {
            out.push_str("      Locale(\"he\", \"IL\"),\n");
        } else {
            let (language, country) = split_locale(locale);
            out.push_str(&format!("      Locale(\"{language}\", \"{country}\"),\n"));
        }
    }

    out.push_str(DELEGATE_RESOLUTION);

    for locale in locales {
        if locale.starts_with("iw") {
            out.push_str(
                "        case \"iw_IL\":\n        case \"he_IL\":\n          S.current = const $he_IL();\n          return SynchronousFuture<S>(S.current);\n",
            );
        } else {
            let name = class_name(locale);
            out.push_str(&format!(
                "        case \"{locale}\":\n          S.current = const {name}();\n          return SynchronousFuture<S>(S.current);\n"
            ));
        }
    }

    out.push_str(DELEGATE_FOOTER);
}
