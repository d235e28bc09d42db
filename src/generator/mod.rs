//! Core classification and code-emission engine.
//!
//! Recomputes everything from the freshly loaded bundles on every run: the
//! reference locale is classified first (its key set filters the others),
//! every locale's class is emitted, then the delegate, and the assembled
//! document is handed to the sink which writes only on change.

use anyhow::{Context, Result};
use indexmap::IndexMap;

pub mod classify;
pub mod delegate;
pub mod locale_class;
pub mod params;
pub mod plurals;
pub mod templates;

use classify::classify;
use delegate::emit_delegate;
use locale_class::{emit_locale_class, emit_reference_class, emit_reference_stub};
use templates::HEADER;

use crate::arb::{BundleProvider, REFERENCE_LOCALE};
use crate::sink::DocumentSink;

#[derive(Debug)]
pub struct GenerateOutcome {
    /// Locale codes that were emitted, in provider order.
    pub locales: Vec<String>,
    /// Warnings collected while loading bundles (skipped files).
    pub warnings: Vec<String>,
    /// Whether the output document was rewritten.
    pub written: bool,
}

pub struct Generator<'a> {
    provider: &'a dyn BundleProvider,
    sink: &'a dyn DocumentSink,
}

impl<'a> Generator<'a> {
    pub fn new(provider: &'a dyn BundleProvider, sink: &'a dyn DocumentSink) -> Self {
        Self { provider, sink }
    }

    pub fn generate(&self) -> Result<GenerateOutcome> {
        let mut scan = self.provider.load_bundles()?;
        if scan.bundles.is_empty() {
            scan.bundles
                .push(self.provider.create_empty_bundle(REFERENCE_LOCALE)?);
        }

        let reference = scan
            .bundles
            .iter()
            .find(|b| b.locale == REFERENCE_LOCALE)
            .with_context(|| {
                format!("No bundle found for reference locale '{REFERENCE_LOCALE}'")
            })?;
        let reference_entries = reference.entries.clone();

        let mut document = String::from(HEADER);
        emit_reference_class(&classify(&reference_entries), &reference_entries, &mut document);

        for bundle in &scan.bundles {
            if bundle.locale == REFERENCE_LOCALE {
                emit_reference_stub(&mut document);
            } else {
                let entries = filter_to_reference(&bundle.entries, &reference_entries);
                emit_locale_class(&bundle.locale, &classify(&entries), &entries, &mut document);
            }
        }

        let locales: Vec<String> = scan.bundles.iter().map(|b| b.locale.clone()).collect();
        emit_delegate(&locales, &mut document);

        let written = self.sink.replace_if_changed(&document)?;

        Ok(GenerateOutcome {
            locales,
            warnings: scan.warnings,
            written,
        })
    }
}

/// Keys absent from the reference locale are dropped, not emitted.
fn filter_to_reference(
    entries: &IndexMap<String, String>,
    reference: &IndexMap<String, String>,
) -> IndexMap<String, String> {
    entries
        .iter()
        .filter(|(key, _)| reference.contains_key(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
