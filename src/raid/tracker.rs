/// Raid-presence tracker
///
/// Decides on every world-state change whether the player is inside the
/// encounter and owns the reset boundary.
use crate::client::{GameClient, GameState};

use super::phase::RaidPhase;
use super::state::RaidState;

/// What a presence check did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceChange {
    /// Client not logged in, state untouched
    Skipped,
    /// Inactive before, active now
    Entered(RaidPhase),
    /// Active before, reset now
    Left(RaidPhase),
    /// Same `active` flag as before
    Unchanged(RaidPhase),
}

#[derive(Debug, Default)]
pub struct RaidPresenceTracker;

impl RaidPresenceTracker {
    pub fn new() -> Self {
        Self
    }

    /// Re-evaluate presence. Repeated calls with the same world state only
    /// reconfirm the flags.
    pub fn update(&self, client: &dyn GameClient, state: &mut RaidState) -> PresenceChange {
        if client.game_state() != GameState::LoggedIn {
            return PresenceChange::Skipped;
        }

        let was_active = state.active;
        let phase = RaidPhase::from_region(client.local_region_id());

        if phase == RaidPhase::Lobby {
            state.reset();
        }

        if phase.is_raid() {
            state.active = true;
        } else {
            state.reset();
        }

        match (was_active, state.active) {
            (false, true) => {
                tracing::info!(phase = %phase, "Entered raid");
                PresenceChange::Entered(phase)
            }
            (true, false) => {
                tracing::info!(phase = %phase, "Left raid, state reset");
                PresenceChange::Left(phase)
            }
            _ => PresenceChange::Unchanged(phase),
        }
    }
}
