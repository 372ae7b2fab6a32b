//! Interfaces to the external collaborators.
//!
//! The save container, the creature data record and the lineage provider
//! live outside this crate; the kernel only sees them through the traits
//! and types defined here.

mod scan;

use serde::Serialize;

pub use scan::{
    add_box_data, add_extra_data, add_party_data, collect_slots, SaveContainer, ScanEntry,
    SlotOrigin,
};

/// Read access to a captured creature record.
///
/// Implemented by the external data-record layer; the kernel never mutates
/// a creature and never sees its serialized form.
pub trait CreatureRecord {
    fn species(&self) -> u16;
    fn form(&self) -> u8;
    /// Level the save reports the creature was met at.
    fn met_level(&self) -> u8;
    /// Location id the save reports the creature was met at.
    fn met_location(&self) -> u16;
    /// Generation of the game that originally created the record.
    fn generation(&self) -> u8;
}

/// One candidate step in a creature's possible evolutionary history at the
/// time of the reported encounter.
///
/// The lineage provider supplies these as an ordered slice; the match
/// engine preserves that order as evaluation priority but matches on
/// content, not position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EvoCriteria {
    pub species: u16,
    pub form: u8,
}

impl EvoCriteria {
    pub const fn new(species: u16, form: u8) -> Self {
        Self { species, form }
    }
}
