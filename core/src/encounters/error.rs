//! Error types for encounter table decoding

use thiserror::Error;

/// Errors while decoding a packed encounter area block.
///
/// Decoding is all-or-nothing per area: any of these aborts the area's
/// construction and no partial area is ever returned.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("area block of {len} bytes is shorter than the location/count header")]
    MissingHeader { len: usize },

    #[error("area {location}: declared slot count is zero")]
    EmptyArea { location: u16 },

    #[error("area {location}: read of {needed} bytes at offset {offset} runs past the end of the block")]
    UnexpectedEnd {
        location: u16,
        offset: usize,
        needed: usize,
    },

    #[error("area {location}: slot group overshoots the declared count ({produced} produced, {declared} declared)")]
    SlotOverflow {
        location: u16,
        declared: u8,
        produced: usize,
    },

    #[error("area {location}: level range {min}-{max} is inverted")]
    InvertedLevelRange { location: u16, min: u8, max: u8 },

    #[error("table already contains an area for location {location}")]
    DuplicateLocation { location: u16 },
}
