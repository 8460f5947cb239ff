//! Node-level surface sensitivities per currency.

use super::error::SensitivityError;
use ratevol_core::types::Currency;
use std::cmp::Ordering;

/// Sensitivity to every node of one surface, in one currency.
///
/// The vector follows the surface's node order and always has the
/// surface's full node count, zeros included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyParameterSensitivity {
    name: String,
    currency: Currency,
    sensitivity: Vec<f64>,
}

impl CurrencyParameterSensitivity {
    /// Construct from a surface name, currency, and node-value vector.
    pub fn new(name: impl Into<String>, currency: Currency, sensitivity: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            currency,
            sensitivity,
        }
    }

    /// Returns the surface name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the per-node sensitivity values.
    pub fn sensitivity(&self) -> &[f64] {
        &self.sensitivity
    }

    /// Number of nodes covered.
    pub fn parameter_count(&self) -> usize {
        self.sensitivity.len()
    }

    /// Returns this sensitivity with every node value scaled by `factor`.
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            currency: self.currency,
            sensitivity: self.sensitivity.iter().map(|v| v * factor).collect(),
        }
    }

    fn key_order(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then(self.currency.cmp(&other.currency))
    }

    /// Element-wise sum with another entry for the same key.
    fn added_to(&self, other: &Self) -> Result<Self, SensitivityError> {
        if self.sensitivity.len() != other.sensitivity.len() {
            return Err(SensitivityError::ParameterCountMismatch {
                name: self.name.clone(),
                currency: self.currency.code().to_string(),
                left: self.sensitivity.len(),
                right: other.sensitivity.len(),
            });
        }
        Ok(Self {
            name: self.name.clone(),
            currency: self.currency,
            sensitivity: self
                .sensitivity
                .iter()
                .zip(&other.sensitivity)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }
}

/// Collection of node-level sensitivities keyed by (surface name, currency).
///
/// Entries are held sorted by key, so equal contents compare equal
/// regardless of how they were assembled.
///
/// # Examples
///
/// ```
/// use ratevol_core::types::Currency;
/// use ratevol_swaption::{CurrencyParameterSensitivities, CurrencyParameterSensitivity};
///
/// let a = CurrencyParameterSensitivities::of(vec![CurrencyParameterSensitivity::new(
///     "Alpha",
///     Currency::USD,
///     vec![1.0, 2.0],
/// )])
/// .unwrap();
/// let b = CurrencyParameterSensitivities::of(vec![CurrencyParameterSensitivity::new(
///     "Alpha",
///     Currency::USD,
///     vec![0.5, 0.5],
/// )])
/// .unwrap();
///
/// let combined = a.combined_with(&b).unwrap();
/// let entry = combined.sensitivity("Alpha", Currency::USD).unwrap();
/// assert_eq!(entry.sensitivity(), &[1.5, 2.5]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrencyParameterSensitivities {
    entries: Vec<CurrencyParameterSensitivity>,
}

impl CurrencyParameterSensitivities {
    /// Creates an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a collection from entries, merging any duplicate keys.
    ///
    /// # Errors
    ///
    /// `ParameterCountMismatch` when duplicate keys carry different node
    /// counts.
    pub fn of(entries: Vec<CurrencyParameterSensitivity>) -> Result<Self, SensitivityError> {
        let mut result = Self::empty();
        for entry in entries {
            result.insert(entry)?;
        }
        Ok(result)
    }

    /// Number of (surface, currency) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyParameterSensitivity> {
        self.entries.iter()
    }

    /// The entry for the given surface name and currency.
    ///
    /// # Errors
    ///
    /// `SensitivityError::NotFound` when no entry exists for the key. A
    /// present entry whose values are all zero is not an error.
    pub fn sensitivity(
        &self,
        name: &str,
        currency: Currency,
    ) -> Result<&CurrencyParameterSensitivity, SensitivityError> {
        self.entries
            .iter()
            .find(|e| e.name() == name && e.currency() == currency)
            .ok_or_else(|| SensitivityError::NotFound {
                name: name.to_string(),
                currency: currency.code().to_string(),
            })
    }

    /// Merge with another collection.
    ///
    /// Matching keys sum element-wise; unmatched keys union in. The
    /// operation is associative and commutative, so folding a set of
    /// collections gives the same result in any order.
    ///
    /// # Errors
    ///
    /// `ParameterCountMismatch` when a shared key carries different node
    /// counts on the two sides; nothing is truncated or padded.
    pub fn combined_with(&self, other: &Self) -> Result<Self, SensitivityError> {
        let mut result = self.clone();
        for entry in &other.entries {
            result.insert(entry.clone())?;
        }
        Ok(result)
    }

    /// Insert an entry, merging into an existing one on key collision.
    fn insert(&mut self, entry: CurrencyParameterSensitivity) -> Result<(), SensitivityError> {
        match self
            .entries
            .binary_search_by(|e| e.key_order(&entry))
        {
            Ok(pos) => {
                let merged = self.entries[pos].added_to(&entry)?;
                self.entries[pos] = merged;
            }
            Err(pos) => {
                self.entries.insert(pos, entry);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn entry(name: &str, currency: Currency, values: &[f64]) -> CurrencyParameterSensitivity {
        CurrencyParameterSensitivity::new(name, currency, values.to_vec())
    }

    fn single(name: &str, currency: Currency, values: &[f64]) -> CurrencyParameterSensitivities {
        CurrencyParameterSensitivities::of(vec![entry(name, currency, values)]).unwrap()
    }

    #[test]
    fn test_multiplied_by() {
        let scaled = entry("Alpha", Currency::USD, &[1.0, -2.0, 0.0]).multiplied_by(2.24);
        assert_eq!(scaled.sensitivity(), &[2.24, -4.48, 0.0]);
        assert_eq!(scaled.name(), "Alpha");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let e = entry("Alpha", Currency::USD, &[1.0, -2.0, 0.0]);
        let json = serde_json::to_string(&e).unwrap();
        let parsed: CurrencyParameterSensitivity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, e);
    }

    #[test]
    fn test_of_merges_duplicates() {
        let s = CurrencyParameterSensitivities::of(vec![
            entry("Alpha", Currency::USD, &[1.0, 2.0]),
            entry("Alpha", Currency::USD, &[0.5, -1.0]),
        ])
        .unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(
            s.sensitivity("Alpha", Currency::USD).unwrap().sensitivity(),
            &[1.5, 1.0]
        );
    }

    #[test]
    fn test_combined_with_matching_keys() {
        let a = single("Alpha", Currency::USD, &[1.0, 2.0]);
        let b = single("Alpha", Currency::USD, &[3.0, 4.0]);
        let combined = a.combined_with(&b).unwrap();
        assert_eq!(combined.len(), 1);
        assert_eq!(
            combined
                .sensitivity("Alpha", Currency::USD)
                .unwrap()
                .sensitivity(),
            &[4.0, 6.0]
        );
    }

    #[test]
    fn test_combined_with_disjoint_keys_unions() {
        let a = single("Alpha", Currency::USD, &[1.0]);
        let b = single("Rho", Currency::USD, &[2.0]);
        let c = single("Alpha", Currency::EUR, &[3.0]);
        let combined = a.combined_with(&b).unwrap().combined_with(&c).unwrap();
        assert_eq!(combined.len(), 3);
        assert_eq!(
            combined
                .sensitivity("Alpha", Currency::EUR)
                .unwrap()
                .sensitivity(),
            &[3.0]
        );
    }

    #[test]
    fn test_combined_with_commutative_and_associative() {
        let a = single("Alpha", Currency::USD, &[1.0, 2.0]);
        let b = single("Alpha", Currency::USD, &[0.1, 0.2]);
        let c = single("Nu", Currency::USD, &[7.0]);

        let ab_c = a
            .combined_with(&b)
            .unwrap()
            .combined_with(&c)
            .unwrap();
        let a_bc = a
            .combined_with(&b.combined_with(&c).unwrap())
            .unwrap();
        let ba_c = b
            .combined_with(&a)
            .unwrap()
            .combined_with(&c)
            .unwrap();
        assert_eq!(ab_c, a_bc);
        assert_eq!(ab_c, ba_c);
    }

    #[test]
    fn test_length_mismatch_is_fatal() {
        let a = single("Alpha", Currency::USD, &[1.0, 2.0]);
        let b = single("Alpha", Currency::USD, &[1.0, 2.0, 3.0]);
        match a.combined_with(&b) {
            Err(SensitivityError::ParameterCountMismatch {
                name,
                left,
                right,
                ..
            }) => {
                assert_eq!(name, "Alpha");
                assert_eq!((left, right), (2, 3));
            }
            other => panic!("Expected ParameterCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_distinct_from_zero() {
        let s = single("Alpha", Currency::USD, &[0.0, 0.0]);
        // Present but zero: fine
        let zero = s.sensitivity("Alpha", Currency::USD).unwrap();
        assert_relative_eq!(zero.sensitivity()[0], 0.0);
        // Absent key: error
        assert!(matches!(
            s.sensitivity("Alpha", Currency::EUR),
            Err(SensitivityError::NotFound { .. })
        ));
        assert!(matches!(
            s.sensitivity("Beta", Currency::USD),
            Err(SensitivityError::NotFound { .. })
        ));
    }

    #[test]
    fn test_entries_sorted_by_key() {
        let s = CurrencyParameterSensitivities::of(vec![
            entry("Rho", Currency::USD, &[1.0]),
            entry("Alpha", Currency::USD, &[2.0]),
            entry("Alpha", Currency::EUR, &[3.0]),
        ])
        .unwrap();
        let keys: Vec<_> = s.iter().map(|e| (e.name().to_string(), e.currency())).collect();
        assert_eq!(
            keys,
            vec![
                ("Alpha".to_string(), Currency::EUR),
                ("Alpha".to_string(), Currency::USD),
                ("Rho".to_string(), Currency::USD),
            ]
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn collection_strategy() -> impl Strategy<Value = CurrencyParameterSensitivities> {
            let names = prop::sample::select(vec!["Alpha", "Beta", "Rho", "Nu"]);
            let entry_strategy = (names, prop::collection::vec(-10.0f64..10.0, 3)).prop_map(
                |(name, values)| entry(name, Currency::USD, &values),
            );
            prop::collection::vec(entry_strategy, 0..4)
                .prop_map(|es| CurrencyParameterSensitivities::of(es).unwrap())
        }

        proptest! {
            #[test]
            fn prop_combined_with_commutes(
                a in collection_strategy(),
                b in collection_strategy(),
            ) {
                prop_assert_eq!(
                    a.combined_with(&b).unwrap(),
                    b.combined_with(&a).unwrap()
                );
            }

            #[test]
            fn prop_empty_is_identity(a in collection_strategy()) {
                let empty = CurrencyParameterSensitivities::empty();
                prop_assert_eq!(a.combined_with(&empty).unwrap(), a.clone());
                prop_assert_eq!(empty.combined_with(&a).unwrap(), a);
            }
        }
    }
}
