//! Queryable per-version encounter tables.

use hashbrown::HashMap;

use crate::providers::{CreatureRecord, EvoCriteria};
use crate::version::GameVersion;

use super::area::EncounterArea;
use super::error::TableError;
use super::slot::EncounterSlot;

/// Every decoded area for one game version, keyed by location.
///
/// Built once at load time; immutable and freely shareable across threads
/// afterwards.
#[derive(Debug, Clone)]
pub struct EncounterTable {
    pub game: GameVersion,
    areas: Vec<EncounterArea>,
    by_location: HashMap<u16, usize>,
}

impl EncounterTable {
    /// Decodes a full table from per-area byte blocks.
    ///
    /// All-or-nothing: the first malformed block fails the whole load, and
    /// a location appearing twice is rejected. Callers that prefer to skip
    /// bad areas can decode blocks individually through
    /// [`EncounterArea::decode`].
    pub fn decode<B: AsRef<[u8]>>(
        game: GameVersion,
        permit_crossover: bool,
        blocks: &[B],
    ) -> Result<Self, TableError> {
        let mut areas = Vec::with_capacity(blocks.len());
        let mut by_location = HashMap::with_capacity(blocks.len());
        for block in blocks {
            let area = EncounterArea::decode(block.as_ref(), game, permit_crossover)?;
            if by_location.insert(area.location, areas.len()).is_some() {
                return Err(TableError::DuplicateLocation {
                    location: area.location,
                });
            }
            areas.push(area);
        }
        let slots: usize = areas.iter().map(|area| area.slots.len()).sum();
        tracing::debug!(?game, areas = areas.len(), slots, "decoded encounter table");
        Ok(Self {
            game,
            areas,
            by_location,
        })
    }

    /// Area defined at the given location, if any.
    pub fn area(&self, location: u16) -> Option<&EncounterArea> {
        self.by_location.get(&location).map(|&idx| &self.areas[idx])
    }

    /// All areas, in decode order.
    pub fn areas(&self) -> impl Iterator<Item = &EncounterArea> {
        self.areas.iter()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Areas whose slots may explain an encounter reported at
    /// `met_location`, in decode order.
    pub fn areas_accepting(&self, met_location: u16) -> impl Iterator<Item = &EncounterArea> {
        self.areas
            .iter()
            .filter(move |area| area.accepts_location(met_location))
    }

    /// Every slot in the table that could have produced the creature:
    /// areas gated by location acceptance, slots by the match rules, both
    /// lazily and in decode/table order.
    pub fn matching_slots<'a, C: CreatureRecord>(
        &'a self,
        creature: &'a C,
        chain: &'a [EvoCriteria],
    ) -> impl Iterator<Item = &'a EncounterSlot> + 'a {
        self.areas_accepting(creature.met_location())
            .flat_map(move |area| area.matching_slots(creature, chain))
    }
}
