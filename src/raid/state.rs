/// Raid state owned by the plugin
///
/// Mutated by the presence tracker (`active`, resets) and the callout
/// classifier (`callout`, `sight_granted`).
use std::fmt;

/// Inferred current mechanic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalloutKind {
    #[default]
    Default,
    Pillars,
    Vents,
    DoubleDamage,
    SightChange,
}

impl fmt::Display for CalloutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalloutKind::Default => write!(f, "None"),
            CalloutKind::Pillars => write!(f, "Pillars"),
            CalloutKind::Vents => write!(f, "Vents"),
            CalloutKind::DoubleDamage => write!(f, "Double Damage"),
            CalloutKind::SightChange => write!(f, "Sight Change"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RaidState {
    /// Player is inside the nexus or the encounter room
    pub active: bool,

    /// Result of the last classification pass
    pub callout: CalloutKind,

    /// Set by a sight-granted animation, cleared by sight-removed or a reset
    pub sight_granted: bool,
}

impl RaidState {
    /// Back to defaults. Clears `sight_granted` as well.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
