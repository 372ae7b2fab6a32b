//! Flattening a save container into scannable slot entries.
//!
//! Bulk legality scans want one flat list of (origin, creature) pairs per
//! save. The container itself is opaque; it only has to enumerate its box,
//! party and extra storage. Box slots are collected even when empty so a
//! scan sees every storage position; party and extra slots are sparse by
//! nature and blank entries are skipped.

use serde::Serialize;

use super::CreatureRecord;

/// Where in the save a scanned creature came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SlotOrigin {
    Box { box_index: usize, slot: usize },
    Party { index: usize },
    Extra { label: String },
}

/// One scanned storage slot.
#[derive(Debug, Clone)]
pub struct ScanEntry<C> {
    pub origin: SlotOrigin,
    pub creature: C,
}

/// Read access to a save file's creature storage.
///
/// Implemented by the external save-container layer. The container format
/// and per-slot byte layout are its business; this crate only consumes the
/// enumeration.
pub trait SaveContainer {
    type Creature: CreatureRecord;

    /// Box storage as a flat, box-major list. Empty when the save has no
    /// box system.
    fn box_data(&self) -> Vec<Self::Creature>;
    fn box_count(&self) -> usize;
    /// Slots per box.
    fn box_capacity(&self) -> usize;

    /// Current party members.
    fn party_data(&self) -> Vec<Self::Creature>;

    /// Out-of-band slots (daycare, fused forms, ...) with display labels.
    fn extra_slots(&self) -> Vec<(String, Self::Creature)>;
}

/// Collects every scannable slot of a save into one list: boxes first,
/// then party, then extras.
pub fn collect_slots<S: SaveContainer>(sav: &S) -> Vec<ScanEntry<S::Creature>> {
    let mut entries = Vec::new();
    add_box_data(sav, &mut entries);
    add_party_data(sav, &mut entries);
    add_extra_data(sav, &mut entries);
    entries
}

/// Appends every box position, including blanks.
pub fn add_box_data<S: SaveContainer>(sav: &S, out: &mut Vec<ScanEntry<S::Creature>>) {
    let capacity = sav.box_capacity();
    if capacity == 0 {
        return;
    }
    let declared = sav.box_count() * capacity;
    for (ctr, creature) in sav.box_data().into_iter().take(declared).enumerate() {
        out.push(ScanEntry {
            origin: SlotOrigin::Box {
                box_index: ctr / capacity,
                slot: ctr % capacity,
            },
            creature,
        });
    }
}

/// Appends occupied party slots; blank entries are skipped.
pub fn add_party_data<S: SaveContainer>(sav: &S, out: &mut Vec<ScanEntry<S::Creature>>) {
    for (index, creature) in sav.party_data().into_iter().enumerate() {
        if creature.species() == 0 {
            continue;
        }
        out.push(ScanEntry {
            origin: SlotOrigin::Party { index },
            creature,
        });
    }
}

/// Appends occupied extra slots; blank entries are skipped.
pub fn add_extra_data<S: SaveContainer>(sav: &S, out: &mut Vec<ScanEntry<S::Creature>>) {
    for (label, creature) in sav.extra_slots() {
        if creature.species() == 0 {
            continue;
        }
        out.push(ScanEntry {
            origin: SlotOrigin::Extra { label },
            creature,
        });
    }
}
