//! # Species Module
//!
//! Species metadata and the dex lookup boundary.
//!
//! The safari core never owns species data itself; it asks a [`SpeciesDex`]
//! for the attributes it needs when an encounter is spawned. [`BuiltinDex`]
//! ships the standard safari roster so the crate is usable out of the box,
//! and arbitrary data sets can be injected or loaded from JSON.

use crate::{SafariError, SafariResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Elemental typing for species.
///
/// `None` is the sentinel for a missing secondary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementalType {
    None,
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Full metadata for one species as returned by a dex lookup.
///
/// # Examples
///
/// ```
/// use safari::{ElementalType, SpeciesData};
///
/// let tauros = SpeciesData::new("Tauros", 128, ElementalType::Normal, ElementalType::None, 45);
/// assert_eq!(tauros.id, 128);
/// assert_eq!(tauros.secondary_type, ElementalType::None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Display name, unique within a dex
    pub name: String,
    /// National dex identifier
    pub id: u32,
    /// Primary elemental type
    pub primary_type: ElementalType,
    /// Secondary elemental type (`ElementalType::None` if absent)
    pub secondary_type: ElementalType,
    /// Base catch rate (0-255 scale)
    pub catch_rate: u32,
}

impl SpeciesData {
    /// Creates a new species record.
    pub fn new(
        name: impl Into<String>,
        id: u32,
        primary_type: ElementalType,
        secondary_type: ElementalType,
        catch_rate: u32,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            primary_type,
            secondary_type,
            catch_rate,
        }
    }
}

/// Metadata lookup boundary.
///
/// Implemented by whatever owns the full species database in the host game.
/// A `None` return is treated by callers as a contract violation, not a
/// recoverable runtime condition.
pub trait SpeciesDex {
    /// Looks up full species metadata by display name.
    fn species(&self, name: &str) -> Option<&SpeciesData>;
}

/// In-memory dex backed by a name-keyed map.
#[derive(Debug, Clone, Default)]
pub struct BuiltinDex {
    entries: HashMap<String, SpeciesData>,
}

impl BuiltinDex {
    /// Creates a dex from an arbitrary data set. Later duplicates win.
    pub fn new(entries: Vec<SpeciesData>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|data| (data.name.clone(), data))
                .collect(),
        }
    }

    /// Loads a dex from a JSON array of species records.
    pub fn from_json_str(json: &str) -> SafariResult<Self> {
        let entries: Vec<SpeciesData> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Loads a dex from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> SafariResult<Self> {
        let json = std::fs::read_to_string(path).map_err(SafariError::Io)?;
        Self::from_json_str(&json)
    }

    /// The standard Kanto safari roster with real dex ids, types, and
    /// catch rates.
    pub fn kanto_safari() -> Self {
        use ElementalType::*;

        Self::new(vec![
            SpeciesData::new("Nidoran(F)", 29, Poison, None, 235),
            SpeciesData::new("Nidorina", 30, Poison, None, 120),
            SpeciesData::new("Nidoran(M)", 32, Poison, None, 235),
            SpeciesData::new("Nidorino", 33, Poison, None, 120),
            SpeciesData::new("Exeggcute", 102, Grass, Psychic, 90),
            SpeciesData::new("Paras", 46, Bug, Grass, 190),
            SpeciesData::new("Parasect", 47, Bug, Grass, 75),
            SpeciesData::new("Rhyhorn", 111, Ground, Rock, 120),
            SpeciesData::new("Chansey", 113, Normal, None, 30),
            SpeciesData::new("Scyther", 123, Bug, Flying, 45),
            SpeciesData::new("Pinsir", 127, Bug, None, 45),
            SpeciesData::new("Kangaskhan", 115, Normal, None, 45),
            SpeciesData::new("Tauros", 128, Normal, None, 45),
            SpeciesData::new("Cubone", 104, Ground, None, 190),
            SpeciesData::new("Marowak", 105, Ground, None, 75),
            SpeciesData::new("Tangela", 114, Grass, None, 45),
        ])
    }

    /// Number of species in the dex.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dex contains no species.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SpeciesDex for BuiltinDex {
    fn species(&self, name: &str) -> Option<&SpeciesData> {
        self.entries.get(name)
    }
}
