//! Plural family detection.
//!
//! Keys ending in a plural quantity suffix (`fooZero`, `fooOne`, ...,
//! `fooOther`) form a family under the shared base id. A family is only
//! accepted when its `other` case is present; otherwise the member keys stay
//! ordinary keys under their literal suffixed names.

use std::collections::HashSet;

use indexmap::IndexMap;

/// Grammatical plural category used to select a plural sub-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl Quantity {
    /// All quantities, in suffix-matching and emission order.
    pub const ALL: [Quantity; 6] = [
        Quantity::Zero,
        Quantity::One,
        Quantity::Two,
        Quantity::Few,
        Quantity::Many,
        Quantity::Other,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Quantity::Zero => "zero",
            Quantity::One => "one",
            Quantity::Two => "two",
            Quantity::Few => "few",
            Quantity::Many => "many",
            Quantity::Other => "other",
        }
    }

    /// The literal the generated switch matches against, `None` for `Other`
    /// which becomes the default branch.
    pub fn count_literal(self) -> Option<&'static str> {
        match self {
            Quantity::Zero => Some("0"),
            Quantity::One => Some("1"),
            Quantity::Two => Some("2"),
            Quantity::Few => Some("few"),
            Quantity::Many => Some("many"),
            Quantity::Other => None,
        }
    }
}

/// Split a key into its base id and plural quantity, if it ends with a
/// recognized suffix (case-insensitive, fixed matching order, at most one
/// suffix per key).
pub fn match_plural_key(key: &str) -> Option<(&str, Quantity)> {
    for quantity in Quantity::ALL {
        let suffix = quantity.suffix();
        if key.len() <= suffix.len() {
            continue;
        }
        let split = key.len() - suffix.len();
        if !key.is_char_boundary(split) {
            continue;
        }
        if key[split..].eq_ignore_ascii_case(suffix) {
            return Some((&key[..split], quantity));
        }
    }
    None
}

/// A validated plural family: one case value per present quantity, `Other`
/// always among them.
#[derive(Debug, Clone)]
pub struct PluralFamily {
    pub base_id: String,
    pub cases: IndexMap<Quantity, String>,
}

impl PluralFamily {
    /// Accessor name for the generated method; a separator left over after
    /// suffix stripping is dropped.
    pub fn accessor_id(&self) -> &str {
        self.base_id.strip_suffix('_').unwrap_or(&self.base_id)
    }

    pub fn other_value(&self) -> &str {
        // Families are only constructed with Other present.
        self.cases
            .get(&Quantity::Other)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Group plural families out of a key set.
///
/// Returns the accepted families (in first-occurrence order of their member
/// keys) and the set of keys they consumed. Keys of rejected groups (missing
/// `other`) are not consumed.
pub fn group_plurals(
    keys: &[String],
    values: &IndexMap<String, String>,
) -> (Vec<PluralFamily>, HashSet<String>) {
    let mut groups: IndexMap<String, Vec<(Quantity, String)>> = IndexMap::new();

    for key in keys {
        if let Some((base, quantity)) = match_plural_key(key)
            && !base.is_empty()
        {
            groups
                .entry(base.to_string())
                .or_default()
                .push((quantity, key.clone()));
        }
    }

    let mut families = Vec::new();
    let mut consumed = HashSet::new();

    for (base_id, members) in groups {
        if !members.iter().any(|(q, _)| *q == Quantity::Other) {
            continue;
        }

        let mut cases = IndexMap::new();
        for (quantity, key) in members {
            if let Some(value) = values.get(&key) {
                cases.insert(quantity, value.clone());
            }
            consumed.insert(key);
        }
        families.push(PluralFamily { base_id, cases });
    }

    (families, consumed)
}
