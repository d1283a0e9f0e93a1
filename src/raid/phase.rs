/// Raid phase classification
///
/// Maps a region id to where the player is relative to the encounter.
use std::fmt;

pub const TOA_LOBBY_REGION: u32 = 13454;
pub const TOA_NEXUS_REGION: u32 = 14160;
pub const TOA_APMEKEN_REGION: u32 = 15186;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaidPhase {
    /// Raid lobby, always treated as outside the raid
    Lobby,

    /// Nexus room between paths
    Nexus,

    /// Apmeken encounter room
    Encounter,

    /// Anywhere else, including an unknown location
    Other,
}

impl RaidPhase {
    pub fn from_region(region: Option<u32>) -> Self {
        match region {
            Some(TOA_LOBBY_REGION) => RaidPhase::Lobby,
            Some(TOA_NEXUS_REGION) => RaidPhase::Nexus,
            Some(TOA_APMEKEN_REGION) => RaidPhase::Encounter,
            _ => RaidPhase::Other,
        }
    }

    /// Whether callouts should be tracked in this phase
    pub fn is_raid(&self) -> bool {
        matches!(self, RaidPhase::Nexus | RaidPhase::Encounter)
    }
}

impl fmt::Display for RaidPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaidPhase::Lobby => write!(f, "Lobby"),
            RaidPhase::Nexus => write!(f, "Nexus"),
            RaidPhase::Encounter => write!(f, "Apmeken"),
            RaidPhase::Other => write!(f, "Outside raid"),
        }
    }
}
