/// Raid module
///
/// Tracks raid presence and infers the active sight mechanic.
///
/// ## Architecture
///
/// ```text
/// world state changed ──> RaidPresenceTracker ──┐
///                                               ├──> RaidState
/// sight sound played  ──> CalloutClassifier  ───┘     (active, callout, sight_granted)
///                           ├── sight markers   (pillars / vents)
///                           ├── spot animations (sight change / double damage)
///                           └── sight_granted   (double damage fallback)
/// ```

pub mod classifier;
pub mod phase;
pub mod state;
pub mod tracker;

// Re-export commonly used types
pub use classifier::{CalloutClassifier, SIGHT_SOUND_EFFECT_ID};
pub use phase::RaidPhase;
pub use state::{CalloutKind, RaidState};
pub use tracker::{PresenceChange, RaidPresenceTracker};
