//! Encounter areas: block decoding, location acceptance and slot matching.

use crate::game_data;
use crate::providers::{CreatureRecord, EvoCriteria};
use crate::version::GameVersion;

use super::error::TableError;
use super::slot::{ConditionFlags, EncounterSlot};

/// One map location's wild-encounter definition.
///
/// Built once from a packed byte block at table-load time and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct EncounterArea {
    pub location: u16,
    pub game: GameVersion,
    /// Whether this area's slots may also satisfy encounters reported at a
    /// connected location.
    pub permit_crossover: bool,
    /// Slots in table order; never empty for a decoded area.
    pub slots: Vec<EncounterSlot>,
}

impl EncounterArea {
    /// Decodes one packed area block.
    ///
    /// Layout, little-endian: location id, total slot count, then slot
    /// groups of `u16` condition flags, level min, level max, entry count,
    /// one reserved byte, and `entry count` packed species+form pairs.
    /// Groups repeat until exactly the declared slot count has been
    /// produced; a block that cannot satisfy the count fails rather than
    /// reading out of bounds, and no partial area is returned.
    pub fn decode(
        data: &[u8],
        game: GameVersion,
        permit_crossover: bool,
    ) -> Result<Self, TableError> {
        if data.len() < 2 {
            return Err(TableError::MissingHeader { len: data.len() });
        }
        let location = u16::from(data[0]);
        let declared = data[1];
        if declared == 0 {
            return Err(TableError::EmptyArea { location });
        }

        let mut slots = Vec::with_capacity(usize::from(declared));
        let mut ofs = 2;
        loop {
            let header = data
                .get(ofs..ofs + 6)
                .ok_or(TableError::UnexpectedEnd {
                    location,
                    offset: ofs,
                    needed: 6,
                })?;
            let flags = ConditionFlags::from_bits_retain(u16::from_le_bytes([
                header[0], header[1],
            ]));
            let min = header[2];
            let max = header[3];
            if min > max {
                return Err(TableError::InvertedLevelRange { location, min, max });
            }
            let count = usize::from(header[4]);
            // header[5] reserved
            ofs += 6;

            if slots.len() + count > usize::from(declared) {
                return Err(TableError::SlotOverflow {
                    location,
                    declared,
                    produced: slots.len() + count,
                });
            }
            for _ in 0..count {
                let pair = data.get(ofs..ofs + 2).ok_or(TableError::UnexpectedEnd {
                    location,
                    offset: ofs,
                    needed: 2,
                })?;
                let packed = u16::from_le_bytes([pair[0], pair[1]]);
                slots.push(EncounterSlot::swsh(packed, min, max, flags));
                ofs += 2;
            }
            if slots.len() == usize::from(declared) {
                break;
            }
        }

        Ok(Self {
            location,
            game,
            permit_crossover,
            slots,
        })
    }

    /// Can this area explain an encounter reported at `reported`?
    ///
    /// The area's own location always qualifies. Other locations qualify
    /// only when the area permits crossover and the connectivity table
    /// lists the reported location as a neighbor.
    pub fn accepts_location(&self, reported: u16) -> bool {
        if self.location == reported {
            return true;
        }
        if !self.permit_crossover {
            return false;
        }
        game_data::connects(self.location, reported)
    }

    /// Slots of this area that could have produced the creature, lazily,
    /// in table order.
    ///
    /// A met level equal to the post-game boost cap in a boosted zone
    /// bypasses the per-slot level ranges; everything else must fit the
    /// slot's declared range. Candidates are tried in the caller's order;
    /// a slot is yielded at most once.
    pub fn matching_slots<'a>(
        &'a self,
        creature: &impl CreatureRecord,
        chain: &'a [EvoCriteria],
    ) -> impl Iterator<Item = &'a EncounterSlot> + 'a {
        let met = creature.met_level();
        let boosted = met == game_data::BOOST_LEVEL && game_data::is_boosted_zone(self.location);
        self.slots
            .iter()
            .filter(move |slot| slot_matches(slot, chain, met, boosted))
    }
}

/// Decides whether one slot explains the reported encounter.
///
/// Candidates are scanned in order. A species mismatch moves on to the
/// next candidate; once a candidate's species matches, a failed level or
/// form check rejects the slot for every remaining candidate.
fn slot_matches(slot: &EncounterSlot, chain: &[EvoCriteria], met: u8, boosted: bool) -> bool {
    for evo in chain {
        if evo.species != slot.species {
            continue;
        }
        if !boosted && !slot.is_level_within_range(met) {
            return false;
        }
        if slot.form != evo.form && !game_data::can_change_form_after(evo.species) {
            return false;
        }
        return true;
    }
    false
}
