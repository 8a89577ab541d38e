//! # Encounter Module
//!
//! The encounter entity and the zone that spawns it.
//!
//! A [`SafariEncounter`] is one creature presented to the player for a
//! capture attempt. Identity is fixed at construction; the battle flags
//! (`angry`, `eating`) are driven by external turn logic and feed the two
//! derived numbers the battle actually consumes: [`catch_factor`] and
//! [`escape_factor`], recomputed on every read so callers never see stale
//! values across turns.
//!
//! [`catch_factor`]: SafariEncounter::catch_factor
//! [`escape_factor`]: SafariEncounter::escape_factor

use crate::{
    config, CollectionStatus, Notification, Notifier, SafariError, SafariResult, SpawnTable,
    SpeciesData, SpeciesDex,
};
use log::{debug, info};
use rand::Rng;

/// Additive catch-rate bonus from an external progression system.
pub trait CatchBonus {
    /// Current bonus, added to the base catch factor before the flag
    /// modifiers apply.
    fn catch_bonus(&self) -> f64;
}

/// No bonus at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBonus;

impl CatchBonus for NoBonus {
    fn catch_bonus(&self) -> f64 {
        0.0
    }
}

/// A bare number works as a fixed bonus.
impl CatchBonus for f64 {
    fn catch_bonus(&self) -> f64 {
        *self
    }
}

/// Rolls one-in-`chance` shininess. A zero chance never succeeds.
pub fn roll_shiny(chance: u32, rng: &mut impl Rng) -> bool {
    chance > 0 && rng.gen_range(0..chance) == 0
}

/// One active safari encounter.
///
/// Owned by the battle session that spawned it and dropped when that
/// session ends, however it ends (capture, flee, player runs).
#[derive(Debug, Clone)]
pub struct SafariEncounter {
    /// Species display name
    pub name: String,
    /// National dex identifier
    pub id: u32,
    /// Primary elemental type
    pub primary_type: crate::ElementalType,
    /// Secondary elemental type (`None` sentinel if absent)
    pub secondary_type: crate::ElementalType,
    /// Whether this encounter rolled shiny at spawn
    pub shiny: bool,

    base_catch_factor: f64,
    base_escape_factor: f64,
    angry: u32,
    eating: u32,

    /// Overworld sprite position, owned by the movement system
    pub x: i32,
    /// Overworld sprite position, owned by the movement system
    pub y: i32,
    /// Overworld step counter, owned by the movement system
    pub steps: u32,
}

impl SafariEncounter {
    /// Builds an encounter from dex metadata and a shiny roll result.
    pub fn from_species(data: &SpeciesData, shiny: bool) -> Self {
        Self {
            name: data.name.clone(),
            id: data.id,
            primary_type: data.primary_type,
            secondary_type: data.secondary_type,
            shiny,
            base_catch_factor: f64::from(data.catch_rate) / config::CATCH_RATE_DIVISOR,
            base_escape_factor: config::BASE_ESCAPE_FACTOR,
            angry: 0,
            eating: 0,
            x: 0,
            y: 0,
            steps: 0,
        }
    }

    /// Base catch factor fixed at spawn (`catch_rate / 6`).
    pub fn base_catch_factor(&self) -> f64 {
        self.base_catch_factor
    }

    /// Base escape factor fixed at spawn.
    pub fn base_escape_factor(&self) -> f64 {
        self.base_escape_factor
    }

    /// Anger counter; above zero the encounter counts as angry.
    pub fn angry(&self) -> u32 {
        self.angry
    }

    /// Sets the anger counter. Driven by external battle-turn logic.
    pub fn set_angry(&mut self, value: u32) {
        self.angry = value;
    }

    /// Eating counter; above zero the encounter counts as eating.
    pub fn eating(&self) -> u32 {
        self.eating
    }

    /// Sets the eating counter. Driven by external battle-turn logic.
    pub fn set_eating(&mut self, value: u32) {
        self.eating = value;
    }

    /// Capture weight for the current turn, capped at 100.
    ///
    /// Fixed evaluation order: the external bonus is added first, then the
    /// eating penalty halves, then the anger bonus doubles. With both flags
    /// active the two modifiers cancel.
    pub fn catch_factor(&self, bonus: &dyn CatchBonus) -> f64 {
        let mut factor = self.base_catch_factor + bonus.catch_bonus();
        if self.eating > 0 {
            factor /= 2.0;
        }
        if self.angry > 0 {
            factor *= 2.0;
        }

        factor.min(config::MAX_CATCH_FACTOR)
    }

    /// Flee weight for the current turn.
    ///
    /// Eating takes precedence over anger when both flags are active; this
    /// branch structure is asymmetric with `catch_factor` on purpose and
    /// matches live gameplay balance.
    pub fn escape_factor(&self) -> f64 {
        if self.eating > 0 {
            return self.base_escape_factor / 4.0;
        }
        if self.angry > 0 {
            return self.base_escape_factor * 2.0;
        }

        self.base_escape_factor
    }
}

/// A safari zone: the spawn table plus the collaborators every spawn needs.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use std::collections::HashSet;
/// use safari::{BuiltinDex, NullNotifier, SafariZone, SpawnTable};
///
/// let zone = SafariZone::new(
///     SpawnTable::kanto_safari(),
///     BuiltinDex::kanto_safari(),
///     HashSet::new(),
///     NullNotifier,
/// );
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let encounter = zone.random_encounter(&mut rng).unwrap();
/// assert!(encounter.base_catch_factor() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SafariZone<D, C, N> {
    table: SpawnTable,
    dex: D,
    collection: C,
    notifier: N,
    shiny_chance: u32,
}

impl<D, C, N> SafariZone<D, C, N>
where
    D: SpeciesDex,
    C: CollectionStatus,
    N: Notifier,
{
    /// Creates a zone with the default safari shiny chance.
    pub fn new(table: SpawnTable, dex: D, collection: C, notifier: N) -> Self {
        Self {
            table,
            dex,
            collection,
            notifier,
            shiny_chance: config::SHINY_CHANCE_SAFARI,
        }
    }

    /// Overrides the shiny chance denominator (one roll in `chance`;
    /// zero disables shinies entirely).
    pub fn with_shiny_chance(mut self, chance: u32) -> Self {
        self.shiny_chance = chance;
        self
    }

    /// The zone's spawn table.
    pub fn table(&self) -> &SpawnTable {
        &self.table
    }

    /// Spawns an encounter of a specific species.
    ///
    /// An unrecognized name is a caller/dex mismatch and fails hard with
    /// [`SafariError::UnknownSpecies`].
    pub fn encounter(&self, name: &str, rng: &mut impl Rng) -> SafariResult<SafariEncounter> {
        let data = self
            .dex
            .species(name)
            .ok_or_else(|| SafariError::UnknownSpecies(name.to_string()))?;

        let shiny = roll_shiny(self.shiny_chance, rng);
        let encounter = SafariEncounter::from_species(data, shiny);

        if shiny {
            info!("shiny {} (#{}) appeared", encounter.name, encounter.id);
            self.notifier
                .notify(Notification::shiny_encounter(&encounter.name));
        }

        Ok(encounter)
    }

    /// Spawns a random encounter from the spawn table. This is the entry
    /// point external callers use.
    pub fn random_encounter(&self, rng: &mut impl Rng) -> SafariResult<SafariEncounter> {
        let entry = self.table.draw(&self.collection, rng)?;
        debug!("spawn roll selected {} (weight {})", entry.name, entry.weight);
        self.encounter(&entry.name, rng)
    }
}
