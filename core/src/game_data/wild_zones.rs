//! Boosted wild-zone ranges.
//!
//! After the story is completed, open-world zones re-randomize encounter
//! levels up to a fixed cap, so a met level equal to the cap is legal in
//! these zones regardless of a slot's declared range.

/// Level that boosted zones raise encounters to post-game.
pub const BOOST_LEVEL: u8 = 60;

/// Galar mainland wild area, Rolling Fields through Lake of Outrage.
pub fn is_wild_area(location: u16) -> bool {
    (122..=154).contains(&location)
}

/// Isle of Armor wild zones, Fields of Honor through Honeycalm Island.
pub fn is_armor_wild_area(location: u16) -> bool {
    (164..=194).contains(&location)
}

/// True if the location re-randomizes encounter levels post-game.
pub fn is_boosted_zone(location: u16) -> bool {
    is_wild_area(location) || is_armor_wild_area(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainland_range_bounds() {
        assert!(!is_wild_area(121));
        assert!(is_wild_area(122));
        assert!(is_wild_area(154));
        assert!(!is_wild_area(155));
    }

    #[test]
    fn test_armor_range_bounds() {
        assert!(!is_armor_wild_area(163));
        assert!(is_armor_wild_area(164));
        assert!(is_armor_wild_area(194));
        assert!(!is_armor_wild_area(195));
    }

    #[test]
    fn test_boosted_zone_covers_both_ranges() {
        assert!(is_boosted_zone(130));
        assert!(is_boosted_zone(170));
        // the gap between the two ranges is not boosted
        assert!(!is_boosted_zone(160));
        // story-route locations are not boosted
        assert!(!is_boosted_zone(40));
    }
}
