//! ARB bundle loading.
//!
//! An ARB file is a flat JSON object mapping string keys to literal text
//! values, plus optional `@key` metadata entries. This module discovers
//! `strings_<locale>.arb` files in the resource directory and loads each one
//! into a [`LocaleBundle`], preserving key declaration order and dropping
//! metadata keys. Files that fail to parse are skipped with a warning rather
//! than failing the whole run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde_json::Value;

/// The locale whose key set defines the canonical member list.
pub const REFERENCE_LOCALE: &str = "en";

const ARB_EXTENSION: &str = "arb";
const ARB_FILE_PREFIX: &str = "strings_";

/// One locale's key/value entries, in declaration order.
#[derive(Debug, Clone)]
pub struct LocaleBundle {
    pub locale: String,
    pub entries: IndexMap<String, String>,
}

#[derive(Debug, Default)]
pub struct ScanBundlesResult {
    pub bundles: Vec<LocaleBundle>,
    pub warnings: Vec<String>,
}

/// Source of locale bundles, injected into the generator.
pub trait BundleProvider {
    /// Return all discovered bundles, in a stable order.
    fn load_bundles(&self) -> Result<ScanBundlesResult>;

    /// Create an empty bundle for the given locale, persisting it so that a
    /// later run discovers the same bundle.
    fn create_empty_bundle(&self, locale: &str) -> Result<LocaleBundle>;
}

/// File-based [`BundleProvider`] scanning a single resource directory.
pub struct ArbDirectory {
    dir: PathBuf,
}

impl ArbDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BundleProvider for ArbDirectory {
    fn load_bundles(&self) -> Result<ScanBundlesResult> {
        scan_arb_files(&self.dir)
    }

    fn create_empty_bundle(&self, locale: &str) -> Result<LocaleBundle> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;

        let path = self.dir.join(format!("{}{}.arb", ARB_FILE_PREFIX, locale));
        fs::write(&path, "{}\n")
            .with_context(|| format!("Failed to create ARB file: {}", path.display()))?;

        Ok(LocaleBundle {
            locale: locale.to_string(),
            entries: IndexMap::new(),
        })
    }
}

/// Extracts the locale code from an ARB filename.
///
/// Examples:
/// - "strings_en.arb" -> Some("en")
/// - "strings_pt_BR.arb" -> Some("pt_BR")
/// - "colors.arb" -> None
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let prefix = stem.get(..ARB_FILE_PREFIX.len())?;
    let locale = stem.get(ARB_FILE_PREFIX.len()..)?;
    if prefix.eq_ignore_ascii_case(ARB_FILE_PREFIX) && !locale.is_empty() {
        Some(locale.to_string())
    } else {
        None
    }
}

/// Parse one ARB file into an ordered key/value map.
///
/// Metadata entries (keys starting with `@`) and non-string values are
/// excluded. The root must be a JSON object.
pub fn parse_arb_file(path: &Path) -> Result<IndexMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ARB file: {}", path.display()))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse ARB file: {}", path.display()))?;

    let Value::Object(map) = json else {
        bail!("Root of ARB file must be an object: {}", path.display());
    };

    let mut entries = IndexMap::new();
    for (key, value) in map {
        if key.starts_with('@') {
            continue;
        }
        if let Value::String(text) = value {
            entries.insert(key, text);
        }
    }
    Ok(entries)
}

fn scan_arb_files(dir: &Path) -> Result<ScanBundlesResult> {
    let mut result = ScanBundlesResult::default();

    if !dir.exists() {
        return Ok(result);
    }
    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(ARB_EXTENSION))
        .collect();
    // read_dir order is platform-dependent; sort for deterministic output
    paths.sort();

    for path in paths {
        let Some(locale) = extract_locale(&path) else {
            continue;
        };

        match parse_arb_file(&path) {
            Ok(entries) => result.bundles.push(LocaleBundle { locale, entries }),
            Err(e) => result
                .warnings
                .push(format!("Skipped {}: {:#}", path.display(), e)),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_extract_locale() {
        assert_eq!(
            extract_locale(Path::new("strings_en.arb")),
            Some("en".to_string())
        );
        assert_eq!(
            extract_locale(Path::new("strings_pt_BR.arb")),
            Some("pt_BR".to_string())
        );
        assert_eq!(
            extract_locale(Path::new("/res/values/Strings_fr.arb")),
            Some("fr".to_string())
        );
        assert_eq!(extract_locale(Path::new("colors.arb")), None);
        assert_eq!(extract_locale(Path::new("strings_.arb")), None);
    }

    #[test]
    fn test_parse_arb_file_skips_metadata() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strings_en.arb");
        fs::write(
            &path,
            r#"{"greeting": "Hello", "@greeting": {"description": "a greeting"}, "@@locale": "en"}"#,
        )
        .unwrap();

        let entries = parse_arb_file(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("greeting"), Some(&"Hello".to_string()));
    }

    #[test]
    fn test_parse_arb_file_preserves_declaration_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strings_en.arb");
        fs::write(&path, r#"{"zebra": "Z", "apple": "A", "mango": "M"}"#).unwrap();

        let entries = parse_arb_file(&path).unwrap();
        let keys: Vec<&String> = entries.keys().collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_scan_skips_malformed_files() {
        let dir = tempdir().unwrap();

        let mut en = fs::File::create(dir.path().join("strings_en.arb")).unwrap();
        write!(en, r#"{{"greeting": "Hello"}}"#).unwrap();

        let mut fr = fs::File::create(dir.path().join("strings_fr.arb")).unwrap();
        write!(fr, "{{ not json }}").unwrap();

        let result = scan_arb_files(dir.path()).unwrap();
        assert_eq!(result.bundles.len(), 1);
        assert_eq!(result.bundles[0].locale, "en");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("strings_fr.arb"));
    }

    #[test]
    fn test_scan_ignores_unrelated_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("strings_en.arb"), "{}").unwrap();
        fs::write(dir.path().join("colors.arb"), "{}").unwrap();
        fs::write(dir.path().join("strings_de.json"), "{}").unwrap();

        let result = scan_arb_files(dir.path()).unwrap();
        assert_eq!(result.bundles.len(), 1);
        assert_eq!(result.bundles[0].locale, "en");
    }

    #[test]
    fn test_scan_orders_by_filename() {
        let dir = tempdir().unwrap();
        for locale in ["fr", "ar", "en"] {
            fs::write(dir.path().join(format!("strings_{}.arb", locale)), "{}").unwrap();
        }

        let result = scan_arb_files(dir.path()).unwrap();
        let locales: Vec<&str> = result.bundles.iter().map(|b| b.locale.as_str()).collect();
        assert_eq!(locales, vec!["ar", "en", "fr"]);
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let result = scan_arb_files(Path::new("/nonexistent/res/values")).unwrap();
        assert!(result.bundles.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_create_empty_bundle_writes_file() {
        let dir = tempdir().unwrap();
        let provider = ArbDirectory::new(dir.path().join("res/values"));

        let bundle = provider.create_empty_bundle(REFERENCE_LOCALE).unwrap();
        assert_eq!(bundle.locale, "en");
        assert!(bundle.entries.is_empty());

        let path = dir.path().join("res/values/strings_en.arb");
        assert_eq!(fs::read_to_string(path).unwrap(), "{}\n");
    }
}
