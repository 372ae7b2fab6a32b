//! Game version tags carried by decoded tables and slots.

use serde::Serialize;

/// Game title an encounter table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameVersion {
    Sun,
    Moon,
    UltraSun,
    UltraMoon,
    Sword,
    Shield,
}

impl GameVersion {
    /// Generation number for this title.
    pub const fn generation(self) -> u8 {
        match self {
            GameVersion::Sun | GameVersion::Moon => 7,
            GameVersion::UltraSun | GameVersion::UltraMoon => 7,
            GameVersion::Sword | GameVersion::Shield => 8,
        }
    }
}
