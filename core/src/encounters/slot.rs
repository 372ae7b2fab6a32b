//! Per-slot encounter definitions.
//!
//! A slot is one species/form/level/condition combination inside an area.
//! The condition payload is generation-specific: Sword/Shield slots carry a
//! weather bitset, Sun/Moon-era slots carry an SOS-call marker.

use std::fmt;

use bitflags::bitflags;
use serde::Serialize;

/// Species ids occupy the low 11 bits of a packed species+form pair.
pub const SPECIES_MASK: u16 = 0x7FF;

bitflags! {
    /// Environmental/method conditions under which a Sword/Shield slot is
    /// active.
    ///
    /// Bit-exact with the packed table format. The nine low bits are
    /// weather; the two bits above [`Self::ALL`] mark hidden encounters
    /// (shaking trees, fishing spots) rather than weather.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct ConditionFlags: u16 {
        const NORMAL        = 1 << 0;
        const OVERCAST      = 1 << 1;
        const RAINING       = 1 << 2;
        const THUNDERSTORM  = 1 << 3;
        const INTENSE_SUN   = 1 << 4;
        const SNOWING       = 1 << 5;
        const SNOWSTORM     = 1 << 6;
        const SANDSTORM     = 1 << 7;
        const HEAVY_FOG     = 1 << 8;

        const ALL = Self::NORMAL.bits()
            | Self::OVERCAST.bits()
            | Self::RAINING.bits()
            | Self::THUNDERSTORM.bits()
            | Self::INTENSE_SUN.bits()
            | Self::SNOWING.bits()
            | Self::SNOWSTORM.bits()
            | Self::SANDSTORM.bits()
            | Self::HEAVY_FOG.bits();

        const SHAKING_TREES = 1 << 9;
        const FISHING       = 1 << 10;

        const NOT_WEATHER = Self::SHAKING_TREES.bits() | Self::FISHING.bits();
    }
}

impl ConditionFlags {
    const NAMES: [(ConditionFlags, &'static str); 11] = [
        (ConditionFlags::NORMAL, "Normal"),
        (ConditionFlags::OVERCAST, "Overcast"),
        (ConditionFlags::RAINING, "Raining"),
        (ConditionFlags::THUNDERSTORM, "Thunderstorm"),
        (ConditionFlags::INTENSE_SUN, "Intense Sun"),
        (ConditionFlags::SNOWING, "Snowing"),
        (ConditionFlags::SNOWSTORM, "Snowstorm"),
        (ConditionFlags::SANDSTORM, "Sandstorm"),
        (ConditionFlags::HEAVY_FOG, "Heavy Fog"),
        (ConditionFlags::SHAKING_TREES, "Shaking Trees"),
        (ConditionFlags::FISHING, "Fishing"),
    ];
}

/// Renders the set bits as a comma-joined list of condition names.
/// Unknown bits are silently skipped.
impl fmt::Display for ConditionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (bit, name) in ConditionFlags::NAMES {
            if self.contains(bit) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Generation-specific slot payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotCondition {
    /// Sword/Shield: weather and hidden-method bitset.
    Weather(ConditionFlags),
    /// Sun/Moon era: whether the slot is an SOS call-in.
    Sos { is_sos: bool },
}

/// One species/form/level/condition definition within an area.
///
/// Slots are owned by their [`EncounterArea`](super::EncounterArea) and are
/// immutable after decode; borrows of a slot never outlive the area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncounterSlot {
    pub species: u16,
    pub form: u8,
    pub level_min: u8,
    pub level_max: u8,
    pub condition: SlotCondition,
}

impl EncounterSlot {
    /// Builds a Sword/Shield slot from a packed species+form pair.
    ///
    /// The species occupies the low 11 bits, the form the remaining high
    /// bits.
    pub fn swsh(packed: u16, level_min: u8, level_max: u8, weather: ConditionFlags) -> Self {
        Self {
            species: packed & SPECIES_MASK,
            form: (packed >> 11) as u8,
            level_min,
            level_max,
            condition: SlotCondition::Weather(weather),
        }
    }

    /// Builds a Sun/Moon-era slot. These tables are not packed the same
    /// way, so species and form arrive pre-split from the loader.
    pub fn gen7(species: u16, form: u8, level_min: u8, level_max: u8, is_sos: bool) -> Self {
        Self {
            species,
            form,
            level_min,
            level_max,
            condition: SlotCondition::Sos { is_sos },
        }
    }

    /// Generation the slot's table belongs to.
    pub fn generation(&self) -> u8 {
        match self.condition {
            SlotCondition::Weather(_) => 8,
            SlotCondition::Sos { .. } => 7,
        }
    }

    /// True for Sun/Moon-era SOS call-in slots.
    pub fn is_sos(&self) -> bool {
        matches!(self.condition, SlotCondition::Sos { is_sos: true })
    }

    pub fn is_level_within_range(&self, level: u8) -> bool {
        self.level_min <= level && level <= self.level_max
    }

    /// Human-readable description of the slot's encounter condition.
    ///
    /// A weather bitset covering every weather bit collapses to the plain
    /// "Wild" label; anything narrower is qualified with the active
    /// condition names.
    pub fn label(&self) -> String {
        match self.condition {
            SlotCondition::Weather(w) => {
                if w == ConditionFlags::ALL || w.is_empty() {
                    "Wild".to_string()
                } else {
                    format!("Wild - {w}")
                }
            }
            SlotCondition::Sos { is_sos: true } => "Wild - SOS Call".to_string(),
            SlotCondition::Sos { is_sos: false } => "Wild".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_species_form_split() {
        let slot = EncounterSlot::swsh(25 | (3 << 11), 20, 22, ConditionFlags::NORMAL);
        assert_eq!(slot.species, 25);
        assert_eq!(slot.form, 3);

        // all eleven species bits set, form zero
        let slot = EncounterSlot::swsh(0x7FF, 1, 1, ConditionFlags::ALL);
        assert_eq!(slot.species, 0x7FF);
        assert_eq!(slot.form, 0);
    }

    #[test]
    fn test_flag_constants_are_bit_exact() {
        assert_eq!(ConditionFlags::ALL.bits(), 0x1FF);
        assert_eq!(ConditionFlags::SHAKING_TREES.bits(), 0x200);
        assert_eq!(ConditionFlags::FISHING.bits(), 0x400);
        assert_eq!(ConditionFlags::NOT_WEATHER.bits(), 0x600);
    }

    #[test]
    fn test_level_range_bounds_inclusive() {
        let slot = EncounterSlot::swsh(25, 20, 22, ConditionFlags::NORMAL);
        assert!(!slot.is_level_within_range(19));
        assert!(slot.is_level_within_range(20));
        assert!(slot.is_level_within_range(21));
        assert!(slot.is_level_within_range(22));
        assert!(!slot.is_level_within_range(23));
    }

    #[test]
    fn test_label_all_weather_collapses() {
        let slot = EncounterSlot::swsh(25, 20, 22, ConditionFlags::ALL);
        assert_eq!(slot.label(), "Wild");
    }

    #[test]
    fn test_label_single_condition() {
        let slot = EncounterSlot::swsh(25, 20, 22, ConditionFlags::SNOWSTORM);
        assert_eq!(slot.label(), "Wild - Snowstorm");

        let slot = EncounterSlot::swsh(25, 20, 22, ConditionFlags::SHAKING_TREES);
        assert_eq!(slot.label(), "Wild - Shaking Trees");
    }

    #[test]
    fn test_label_combined_conditions() {
        let slot = EncounterSlot::swsh(
            25,
            20,
            22,
            ConditionFlags::NORMAL | ConditionFlags::OVERCAST,
        );
        assert_eq!(slot.label(), "Wild - Normal, Overcast");
    }

    #[test]
    fn test_label_empty_bitset() {
        let slot = EncounterSlot::swsh(25, 20, 22, ConditionFlags::empty());
        assert_eq!(slot.label(), "Wild");
    }

    #[test]
    fn test_gen7_slot() {
        let sos = EncounterSlot::gen7(734, 0, 25, 28, true);
        assert_eq!(sos.generation(), 7);
        assert!(sos.is_sos());
        assert_eq!(sos.label(), "Wild - SOS Call");

        let plain = EncounterSlot::gen7(734, 0, 25, 28, false);
        assert!(!plain.is_sos());
        assert_eq!(plain.label(), "Wild");
    }

    #[test]
    fn test_swsh_slot_generation() {
        let slot = EncounterSlot::swsh(25, 20, 22, ConditionFlags::NORMAL);
        assert_eq!(slot.generation(), 8);
        assert!(!slot.is_sos());
    }
}
