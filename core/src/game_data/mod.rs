mod connectivity;
mod form_changes;
mod wild_zones;

pub use connectivity::{connects, neighbors};
pub use form_changes::can_change_form_after;
pub use wild_zones::{is_armor_wild_area, is_boosted_zone, is_wild_area, BOOST_LEVEL};
