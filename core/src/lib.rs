pub mod encounters;
pub mod game_data;
pub mod providers;
pub mod version;

// Re-exports for convenience
pub use encounters::{
    ConditionFlags, EncounterArea, EncounterSlot, EncounterTable, SlotCondition, TableError,
};
pub use game_data::{can_change_form_after, connects, is_boosted_zone, neighbors, BOOST_LEVEL};
pub use providers::{
    collect_slots, CreatureRecord, EvoCriteria, SaveContainer, ScanEntry, SlotOrigin,
};
pub use version::GameVersion;
