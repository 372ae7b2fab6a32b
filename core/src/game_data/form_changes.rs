//! Species whose form can legitimately change after a wild encounter.
//!
//! A captured creature's current form may differ from the slot that spawned
//! it when the species can re-form post-capture; the match engine consults
//! this set before rejecting a slot on a form mismatch.

use std::sync::LazyLock;

use hashbrown::HashSet;

/// Species ids with post-encounter form changes.
static WILD_FORM_CHANGE: LazyLock<HashSet<u16>> = LazyLock::new(|| {
    [
        412, // Burmy: cloak rebuilds after battles
        479, // Rotom: appliance forms
        676, // Furfrou: trims
        741, // Oricorio: nectar styles
    ]
    .into_iter()
    .collect()
});

/// Can this species' form change after the original encounter?
pub fn can_change_form_after(species: u16) -> bool {
    WILD_FORM_CHANGE.contains(&species)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_change_species() {
        assert!(can_change_form_after(412));
        assert!(can_change_form_after(479));
        assert!(can_change_form_after(676));
        assert!(can_change_form_after(741));
    }

    #[test]
    fn test_fixed_form_species() {
        assert!(!can_change_form_after(25));
        assert!(!can_change_form_after(0));
    }
}
