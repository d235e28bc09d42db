//! Key classification.
//!
//! Partitions one locale's keys into a disjoint set: plural families are
//! extracted first, then keys whose value contains a placeholder become
//! parametrized, the remainder is plain. Order within each group is key
//! declaration order.

use indexmap::IndexMap;

use super::params::has_parameters;
use super::plurals::{PluralFamily, group_plurals};

#[derive(Debug, Default)]
pub struct ClassifiedKeySet {
    pub plain: Vec<String>,
    pub parametrized: Vec<String>,
    pub plurals: Vec<PluralFamily>,
}

pub fn classify(entries: &IndexMap<String, String>) -> ClassifiedKeySet {
    let keys: Vec<String> = entries.keys().cloned().collect();
    let (plurals, consumed) = group_plurals(&keys, entries);

    let mut plain = Vec::new();
    let mut parametrized = Vec::new();
    for key in keys {
        if consumed.contains(&key) {
            continue;
        }
        if entries.get(&key).is_some_and(|value| has_parameters(value)) {
            parametrized.push(key);
        } else {
            plain.push(key);
        }
    }

    ClassifiedKeySet {
        plain,
        parametrized,
        plurals,
    }
}
