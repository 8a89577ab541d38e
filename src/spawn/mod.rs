//! # Spawn Module
//!
//! The weighted spawn table deciding which species appears next.
//!
//! Tables are immutable content data: declared once, validated at
//! construction, and never mutated afterwards. The only runtime input to a
//! draw is the player's collection status, which doubles the effective
//! weight of anything not yet caught so the draw nudges players toward
//! completing the collection.

use crate::{config, SafariError, SafariResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Collection status boundary.
///
/// Implemented by whatever tracks permanently caught species in the host
/// game. Queried on every weight computation, so draws pick up collection
/// changes between calls without any cache invalidation.
pub trait CollectionStatus {
    /// Whether the species has already been added to the permanent collection.
    fn already_caught(&self, name: &str) -> bool;
}

/// A plain set of names works as a collection for tests and demos.
impl CollectionStatus for HashSet<String> {
    fn already_caught(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Interior mutability, so a session can record captures while a zone
/// still holds a shared reference to the collection.
impl CollectionStatus for std::cell::RefCell<HashSet<String>> {
    fn already_caught(&self, name: &str) -> bool {
        self.borrow().contains(name)
    }
}

impl<T: CollectionStatus + ?Sized> CollectionStatus for &T {
    fn already_caught(&self, name: &str) -> bool {
        (**self).already_caught(name)
    }
}

/// One spawn table row: a species name and its base weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnEntry {
    /// Species display name, unique within a table
    pub name: String,
    /// Base spawn weight, strictly positive
    pub weight: u32,
}

impl SpawnEntry {
    /// Creates a new table row.
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// The weight actually used in draws: base weight, doubled while the
    /// species is missing from the collection.
    pub fn effective_weight(&self, collection: &impl CollectionStatus) -> u32 {
        if collection.already_caught(&self.name) {
            self.weight
        } else {
            self.weight * config::UNCAUGHT_WEIGHT_MULTIPLIER
        }
    }
}

/// Immutable ordered spawn table.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use safari::{SpawnEntry, SpawnTable};
///
/// let table = SpawnTable::new(vec![
///     SpawnEntry::new("Paras", 5),
///     SpawnEntry::new("Tauros", 10),
/// ])
/// .unwrap();
///
/// // Nothing caught yet, so every weight is doubled.
/// assert_eq!(table.total_weight(&HashSet::new()), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnTable {
    entries: Vec<SpawnEntry>,
}

impl SpawnTable {
    /// Builds a table, enforcing the configuration invariants: at least one
    /// entry, strictly positive weights, unique names.
    pub fn new(entries: Vec<SpawnEntry>) -> SafariResult<Self> {
        if entries.is_empty() {
            return Err(SafariError::InvalidTable(
                "spawn table has no entries".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.weight == 0 {
                return Err(SafariError::InvalidTable(format!(
                    "entry '{}' has zero weight",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(SafariError::InvalidTable(format!(
                    "duplicate entry '{}'",
                    entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Loads a table from a JSON array of entries.
    pub fn from_json_str(json: &str) -> SafariResult<Self> {
        let entries: Vec<SpawnEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The standard Kanto safari spawn table. Declared order matters: the
    /// draw walks rows in this order.
    pub fn kanto_safari() -> Self {
        let entries = vec![
            SpawnEntry::new("Nidoran(F)", 15),
            SpawnEntry::new("Nidorina", 10),
            SpawnEntry::new("Nidoran(M)", 25),
            SpawnEntry::new("Nidorino", 10),
            SpawnEntry::new("Exeggcute", 20),
            SpawnEntry::new("Paras", 5),
            SpawnEntry::new("Parasect", 15),
            SpawnEntry::new("Rhyhorn", 10),
            SpawnEntry::new("Chansey", 4),
            SpawnEntry::new("Scyther", 4),
            SpawnEntry::new("Pinsir", 4),
            SpawnEntry::new("Kangaskhan", 15),
            SpawnEntry::new("Tauros", 10),
            SpawnEntry::new("Cubone", 10),
            SpawnEntry::new("Marowak", 5),
            SpawnEntry::new("Tangela", 4),
        ];

        // Static data upholds every invariant checked by `new`.
        Self { entries }
    }

    /// The table rows in declared order.
    pub fn entries(&self) -> &[SpawnEntry] {
        &self.entries
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of effective weights over the whole table under the given
    /// collection status.
    pub fn total_weight(&self, collection: &impl CollectionStatus) -> u32 {
        self.entries
            .iter()
            .map(|entry| entry.effective_weight(collection))
            .sum()
    }

    /// Draws one entry at random, proportional to effective weights.
    ///
    /// Fails with [`SafariError::InvalidTable`] on an empty table; that is
    /// a static configuration defect, not a runtime condition.
    pub fn draw<'a>(
        &'a self,
        collection: &impl CollectionStatus,
        rng: &mut impl Rng,
    ) -> SafariResult<&'a SpawnEntry> {
        let total = self.total_weight(collection);
        if total == 0 {
            return Err(SafariError::InvalidTable(
                "spawn table has no drawable entries".to_string(),
            ));
        }

        let roll = rng.gen_range(0.0..f64::from(total));
        self.pick(collection, roll).ok_or_else(|| {
            SafariError::InvalidTable("cumulative weights never covered the roll".to_string())
        })
    }

    /// Deterministic half of the draw: walks rows in declared order,
    /// accumulating effective weights, and returns the first row whose
    /// cumulative sum exceeds `roll`.
    ///
    /// Returns `None` only if `roll >= total_weight()`, which `draw` rules
    /// out by sampling the half-open interval.
    fn pick(&self, collection: &impl CollectionStatus, roll: f64) -> Option<&SpawnEntry> {
        let mut cumulative = 0u32;
        self.entries.iter().find(|entry| {
            cumulative += entry.effective_weight(collection);
            f64::from(cumulative) > roll
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn nothing_caught() -> HashSet<String> {
        HashSet::new()
    }

    fn caught(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_effective_weight_doubles_while_uncaught() {
        let entry = SpawnEntry::new("Tauros", 10);

        assert_eq!(entry.effective_weight(&nothing_caught()), 20);
        assert_eq!(entry.effective_weight(&caught(&["Tauros"])), 10);
    }

    #[test]
    fn test_total_weight_tracks_collection_changes() {
        let table = SpawnTable::kanto_safari();
        let base: u32 = table.entries().iter().map(|e| e.weight).sum();
        assert_eq!(base, 166);

        // Nothing caught: everything doubled.
        assert_eq!(table.total_weight(&nothing_caught()), 332);

        // One capture later, the same table reports a smaller total.
        assert_eq!(
            table.total_weight(&caught(&["Nidoran(M)"])),
            332 - 25
        );

        // Full collection: plain weights.
        let all: HashSet<String> = table
            .entries()
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(table.total_weight(&all), 166);
    }

    #[test]
    fn test_pick_boundaries() {
        let table = SpawnTable::kanto_safari();
        let collection = nothing_caught();
        let total = table.total_weight(&collection);

        let first = table.pick(&collection, 0.0).unwrap();
        assert_eq!(first.name, "Nidoran(F)");

        let last = table
            .pick(&collection, f64::from(total) - 1e-9)
            .unwrap();
        assert_eq!(last.name, "Tangela");

        // Exactly at the total the walk runs off the end.
        assert!(table.pick(&collection, f64::from(total)).is_none());
    }

    #[test]
    fn test_pick_respects_declared_order() {
        let table = SpawnTable::new(vec![
            SpawnEntry::new("A", 1),
            SpawnEntry::new("B", 1),
            SpawnEntry::new("C", 1),
        ])
        .unwrap();
        let collection = caught(&["A", "B", "C"]);

        assert_eq!(table.pick(&collection, 0.5).unwrap().name, "A");
        assert_eq!(table.pick(&collection, 1.0).unwrap().name, "B");
        assert_eq!(table.pick(&collection, 2.99).unwrap().name, "C");
    }

    #[test]
    fn test_draw_distribution_approximates_effective_shares() {
        let table = SpawnTable::kanto_safari();
        // Catching Nidoran(M) halves its share relative to everything else.
        let collection = caught(&["Nidoran(M)"]);
        let mut rng = StdRng::seed_from_u64(12345);

        let iterations = 20_000;
        let mut counts: std::collections::HashMap<String, u32> = Default::default();
        for _ in 0..iterations {
            let entry = table.draw(&collection, &mut rng).unwrap();
            *counts.entry(entry.name.clone()).or_default() += 1;
        }

        let total = f64::from(table.total_weight(&collection));
        for entry in table.entries() {
            let expected =
                f64::from(entry.effective_weight(&collection)) / total * iterations as f64;
            let observed = f64::from(*counts.get(&entry.name).unwrap_or(&0));
            let tolerance = (expected * 0.25).max(30.0);
            assert!(
                (observed - expected).abs() < tolerance,
                "{}: observed {} expected {}",
                entry.name,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_new_rejects_empty_table() {
        assert!(matches!(
            SpawnTable::new(Vec::new()),
            Err(SafariError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_new_rejects_zero_weight() {
        let result = SpawnTable::new(vec![SpawnEntry::new("Chansey", 0)]);
        assert!(matches!(result, Err(SafariError::InvalidTable(_))));
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let result = SpawnTable::new(vec![
            SpawnEntry::new("Paras", 5),
            SpawnEntry::new("Paras", 7),
        ]);
        assert!(matches!(result, Err(SafariError::InvalidTable(_))));
    }

    #[test]
    fn test_draw_on_empty_table_is_a_configuration_error() {
        // Bypasses `new` to exercise the defensive guard inside `draw`.
        let table = SpawnTable {
            entries: Vec::new(),
        };
        let mut rng = StdRng::seed_from_u64(1);

        let result = table.draw(&nothing_caught(), &mut rng);
        assert!(matches!(result, Err(SafariError::InvalidTable(_))));
    }

    #[test]
    fn test_from_json_str_round_trip() {
        let json = serde_json::to_string(SpawnTable::kanto_safari().entries()).unwrap();
        let table = SpawnTable::from_json_str(&json).unwrap();
        assert_eq!(table, SpawnTable::kanto_safari());
    }

    #[test]
    fn test_from_json_str_still_validates() {
        let json = r#"[{"name": "Chansey", "weight": 0}]"#;
        assert!(matches!(
            SpawnTable::from_json_str(json),
            Err(SafariError::InvalidTable(_))
        ));
    }
}
