//! Location connectivity for crossover encounters.
//!
//! Wild-area zones border each other with no loading boundary, so a
//! creature spawned by one zone's table can be caught while standing in a
//! neighbor, and the save records the neighbor as the met location. This
//! table maps each location id to the locations its encounter pool bleeds
//! into. Entries are directional; the few one-way entries below are
//! shipped table data, not mistakes.

use phf::phf_map;

/// Location id -> locations its slots can also explain.
static CONNECTING_AREAS: phf::Map<u16, &'static [u16]> = phf_map! {
    // ─────────────────────────────────────────────────────────────────────────
    // Galar mainland wild area
    // ─────────────────────────────────────────────────────────────────────────
    // Rolling Fields: Dappled Grove, East Lake Axewell, West Lake Axewell.
    // South Lake Miloch is omitted (barely reachable).
    122u16 => &[124, 128, 130],

    // Dappled Grove: Rolling Fields, Watchtower Ruins
    124u16 => &[122, 126],

    // Watchtower Ruins: Dappled Grove, West Lake Axewell
    126u16 => &[124, 130],

    // East Lake Axewell: Rolling Fields, West Lake Axewell, Axew's Eye,
    // North Lake Miloch
    128u16 => &[122, 130, 132, 138],

    // West Lake Axewell: Rolling Fields, Watchtower Ruins, East Lake
    // Axewell, Axew's Eye
    130u16 => &[122, 126, 128, 132],

    // Axew's Eye: East Lake Axewell, West Lake Axewell
    132u16 => &[128, 130],

    // South Lake Miloch: Giant's Seat, North Lake Miloch
    134u16 => &[136, 138],

    // Giant's Seat: South Lake Miloch, North Lake Miloch
    136u16 => &[134, 138],

    // North Lake Miloch: South Lake Miloch, Giant's Seat.
    // Motostoke Riverbank is omitted (barely reachable).
    138u16 => &[134, 136],

    // Motostoke Riverbank: Bridge Field
    140u16 => &[142],

    // Bridge Field: Motostoke Riverbank, Stony Wilderness
    142u16 => &[140, 144],

    // Stony Wilderness: Bridge Field, Dusty Bowl, Giant's Mirror,
    // Giant's Cap
    144u16 => &[142, 146, 148, 152],

    // Dusty Bowl: Stony Wilderness, Giant's Mirror, Hammerlocke Hills
    146u16 => &[144, 148, 150],

    // Giant's Mirror: Stony Wilderness, Dusty Bowl, and itself; the
    // shipped table lists 148 in its own neighbor set
    148u16 => &[144, 146, 148],

    // Hammerlocke Hills: Dusty Bowl, Giant's Mirror, Giant's Cap
    150u16 => &[146, 148, 152],

    // Giant's Cap: Stony Wilderness, Hammerlocke Hills.
    // Lake of Outrage is omitted (barely reachable).
    152u16 => &[144, 150],

    // Lake of Outrage has no crossover neighbors.

    // ─────────────────────────────────────────────────────────────────────────
    // Isle of Armor
    // ─────────────────────────────────────────────────────────────────────────
    // Challenge Beach: Soothing Wetlands, Courageous Cavern
    170u16 => &[166, 176],

    // Challenge Road: Brawler's Cave
    174u16 => &[172],

    // Courageous Cavern: Loop Lagoon
    176u16 => &[178],

    // Warm-Up Tunnel: Training Lowlands, Potbottom Desert
    182u16 => &[180, 184],

    // Workout Sea: Fields of Honor
    186u16 => &[164],

    // Stepping-Stone Sea: Challenge Beach
    188u16 => &[170],

    // Insular Sea: Honeycalm Sea
    190u16 => &[192],

    // Honeycalm Sea: Honeycalm Island
    192u16 => &[194],
};

/// Locations whose encounters the given location's pool can also explain.
/// Unknown locations have no neighbors; that is a valid answer, not an
/// error.
pub fn neighbors(location: u16) -> &'static [u16] {
    CONNECTING_AREAS.get(&location).copied().unwrap_or(&[])
}

/// True if `from`'s encounter pool bleeds into `to`.
pub fn connects(from: u16, to: u16) -> bool {
    neighbors(from).contains(&to)
}
