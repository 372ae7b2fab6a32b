mod area;
mod error;
mod slot;
mod table;


pub use area::EncounterArea;
pub use error::TableError;
pub use slot::{ConditionFlags, EncounterSlot, SlotCondition, SPECIES_MASK};
pub use table::EncounterTable;
